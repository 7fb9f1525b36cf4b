//! Translated strings for the settings, history and help surfaces.
//!
//! Japanese and English are complete. The other languages translate the
//! menus and reuse the English key reference.

use crate::config::{Language, ThemeKind};

pub struct Strings {
    pub settings_title: &'static str,
    pub menu_theme: &'static str,
    pub menu_language: &'static str,
    pub menu_shape: &'static str,
    pub menu_vibration: &'static str,
    pub menu_tax_rate: &'static str,
    pub menu_help: &'static str,
    pub shape_round: &'static str,
    pub shape_square: &'static str,
    pub on: &'static str,
    pub off: &'static str,
    pub history_title: &'static str,
    pub history_empty: &'static str,
    pub history_hint: &'static str,
    pub tax_title: &'static str,
    pub tax_hint: &'static str,
    pub help_title: &'static str,
    pub help_hint: &'static str,
    pub help_keys: &'static [(&'static str, &'static str)],
}

const EN_HELP: &[(&str, &str)] = &[
    ("0-9  d", "digits, double zero"),
    (". ,", "decimal point"),
    ("+ - * x /", "operators"),
    ("Enter =", "equals"),
    ("Backspace", "delete last digit"),
    ("Del c", "clear entry (C)"),
    ("Esc", "clear all (AC)"),
    ("p m l r", "M+  M-  CM  RM"),
    ("n", "change sign"),
    ("s %", "square root, percent"),
    ("t T", "add tax, remove tax"),
    ("h", "history"),
    ("o F2", "settings"),
    ("? F1", "this help"),
    ("q Ctrl+C", "quit"),
];

const JA_HELP: &[(&str, &str)] = &[
    ("0-9  d", "数字、ダブルゼロ"),
    (". ,", "小数点"),
    ("+ - * x /", "四則演算"),
    ("Enter =", "イコール"),
    ("Backspace", "一桁消去"),
    ("Del c", "入力クリア (C)"),
    ("Esc", "オールクリア (AC)"),
    ("p m l r", "M+  M-  CM  RM"),
    ("n", "符号反転"),
    ("s %", "平方根、パーセント"),
    ("t T", "税込、税抜"),
    ("h", "履歴"),
    ("o F2", "設定"),
    ("? F1", "ヘルプ"),
    ("q Ctrl+C", "終了"),
];

static JA: Strings = Strings {
    settings_title: "設定",
    menu_theme: "テーマ",
    menu_language: "言語",
    menu_shape: "ボタンの形",
    menu_vibration: "バイブレーション",
    menu_tax_rate: "税率",
    menu_help: "ヘルプ",
    shape_round: "丸",
    shape_square: "四角",
    on: "オン",
    off: "オフ",
    history_title: "履歴",
    history_empty: "履歴はありません",
    history_hint: "↑↓ スクロール  x 全消去  Esc 閉じる",
    tax_title: "税率 (%)",
    tax_hint: "Enter 保存  Esc キャンセル",
    help_title: "ヘルプ",
    help_hint: "何かキーを押すと閉じます",
    help_keys: JA_HELP,
};

static EN: Strings = Strings {
    settings_title: "Settings",
    menu_theme: "Theme",
    menu_language: "Language",
    menu_shape: "Button shape",
    menu_vibration: "Vibration",
    menu_tax_rate: "Tax rate",
    menu_help: "Help",
    shape_round: "Round",
    shape_square: "Square",
    on: "On",
    off: "Off",
    history_title: "History",
    history_empty: "No history yet",
    history_hint: "↑↓ scroll  x clear  Esc close",
    tax_title: "Tax rate (%)",
    tax_hint: "Enter save  Esc cancel",
    help_title: "Help",
    help_hint: "Press any key to close",
    help_keys: EN_HELP,
};

static ES: Strings = Strings {
    settings_title: "Ajustes",
    menu_theme: "Tema",
    menu_language: "Idioma",
    menu_shape: "Forma de botones",
    menu_vibration: "Vibración",
    menu_tax_rate: "Tasa de impuesto",
    menu_help: "Ayuda",
    shape_round: "Redonda",
    shape_square: "Cuadrada",
    on: "Sí",
    off: "No",
    history_title: "Historial",
    history_empty: "Sin historial",
    history_hint: "↑↓ desplazar  x borrar  Esc cerrar",
    tax_title: "Impuesto (%)",
    tax_hint: "Enter guardar  Esc cancelar",
    help_title: "Ayuda",
    help_hint: "Pulsa una tecla para cerrar",
    help_keys: EN_HELP,
};

static DE: Strings = Strings {
    settings_title: "Einstellungen",
    menu_theme: "Design",
    menu_language: "Sprache",
    menu_shape: "Tastenform",
    menu_vibration: "Vibration",
    menu_tax_rate: "Steuersatz",
    menu_help: "Hilfe",
    shape_round: "Rund",
    shape_square: "Eckig",
    on: "An",
    off: "Aus",
    history_title: "Verlauf",
    history_empty: "Kein Verlauf",
    history_hint: "↑↓ blättern  x löschen  Esc schließen",
    tax_title: "Steuersatz (%)",
    tax_hint: "Enter speichern  Esc abbrechen",
    help_title: "Hilfe",
    help_hint: "Beliebige Taste schließt",
    help_keys: EN_HELP,
};

static RU: Strings = Strings {
    settings_title: "Настройки",
    menu_theme: "Тема",
    menu_language: "Язык",
    menu_shape: "Форма кнопок",
    menu_vibration: "Вибрация",
    menu_tax_rate: "Ставка налога",
    menu_help: "Справка",
    shape_round: "Круглые",
    shape_square: "Квадратные",
    on: "Вкл",
    off: "Выкл",
    history_title: "История",
    history_empty: "История пуста",
    history_hint: "↑↓ прокрутка  x очистить  Esc закрыть",
    tax_title: "Налог (%)",
    tax_hint: "Enter сохранить  Esc отмена",
    help_title: "Справка",
    help_hint: "Нажмите любую клавишу",
    help_keys: EN_HELP,
};

static ZH: Strings = Strings {
    settings_title: "设置",
    menu_theme: "主题",
    menu_language: "语言",
    menu_shape: "按钮形状",
    menu_vibration: "振动",
    menu_tax_rate: "税率",
    menu_help: "帮助",
    shape_round: "圆形",
    shape_square: "方形",
    on: "开",
    off: "关",
    history_title: "历史",
    history_empty: "暂无历史",
    history_hint: "↑↓ 滚动  x 清除  Esc 关闭",
    tax_title: "税率 (%)",
    tax_hint: "Enter 保存  Esc 取消",
    help_title: "帮助",
    help_hint: "按任意键关闭",
    help_keys: EN_HELP,
};

static KO: Strings = Strings {
    settings_title: "설정",
    menu_theme: "테마",
    menu_language: "언어",
    menu_shape: "버튼 모양",
    menu_vibration: "진동",
    menu_tax_rate: "세율",
    menu_help: "도움말",
    shape_round: "둥근",
    shape_square: "사각",
    on: "켜기",
    off: "끄기",
    history_title: "기록",
    history_empty: "기록 없음",
    history_hint: "↑↓ 스크롤  x 지우기  Esc 닫기",
    tax_title: "세율 (%)",
    tax_hint: "Enter 저장  Esc 취소",
    help_title: "도움말",
    help_hint: "아무 키나 눌러 닫기",
    help_keys: EN_HELP,
};

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::Ja => &JA,
        Language::En => &EN,
        Language::Es => &ES,
        Language::De => &DE,
        Language::Ru => &RU,
        Language::Zh => &ZH,
        Language::Ko => &KO,
    }
}

pub fn theme_name(language: Language, theme: ThemeKind) -> &'static str {
    if language == Language::Ja {
        return match theme {
            ThemeKind::Macaron => "マカロン",
            ThemeKind::CottonCandy => "わたあめ",
            ThemeKind::Unicorn => "ユニコーン",
            ThemeKind::Sherbet => "シャーベット",
            ThemeKind::PeachMilk => "ピーチミルク",
            ThemeKind::Pistachio => "ピスタチオ",
            ThemeKind::Lavender => "ラベンダー",
            ThemeKind::Indigo => "インディゴ",
            ThemeKind::Pink => "ピンク",
            ThemeKind::Teal => "ティール",
            ThemeKind::Orange => "オレンジ",
            ThemeKind::Brown => "ブラウン",
            ThemeKind::Green => "グリーン",
            ThemeKind::Grey => "グレー",
            ThemeKind::Miku => "ミク",
        };
    }
    match theme {
        ThemeKind::Macaron => "Macaron",
        ThemeKind::CottonCandy => "Cotton Candy",
        ThemeKind::Unicorn => "Unicorn",
        ThemeKind::Sherbet => "Sherbet",
        ThemeKind::PeachMilk => "Peach Milk",
        ThemeKind::Pistachio => "Pistachio",
        ThemeKind::Lavender => "Lavender",
        ThemeKind::Indigo => "Indigo",
        ThemeKind::Pink => "Pink",
        ThemeKind::Teal => "Teal",
        ThemeKind::Orange => "Orange",
        ThemeKind::Brown => "Brown",
        ThemeKind::Green => "Green",
        ThemeKind::Grey => "Grey",
        ThemeKind::Miku => "Miku",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_strings() {
        for language in Language::ALL {
            let s = strings(language);
            assert!(!s.settings_title.is_empty());
            assert!(!s.help_keys.is_empty());
        }
        assert_eq!(strings(Language::En).menu_theme, "Theme");
        assert_eq!(strings(Language::Ja).menu_theme, "テーマ");
    }

    #[test]
    fn test_help_tables_cover_same_keys() {
        let en: Vec<_> = EN_HELP.iter().map(|(k, _)| *k).collect();
        let ja: Vec<_> = JA_HELP.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, ja);
    }

    #[test]
    fn test_theme_names_fall_back_to_english() {
        assert_eq!(theme_name(Language::De, ThemeKind::CottonCandy), "Cotton Candy");
        assert_eq!(theme_name(Language::Ja, ThemeKind::Miku), "ミク");
    }
}
