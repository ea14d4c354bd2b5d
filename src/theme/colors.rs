//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        logo: Color::Rgb(96, 165, 250),       // 蓝色
        highlight: Color::Rgb(96, 165, 250),
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        stat_total: Color::Rgb(96, 165, 250),
        status_done: Color::Rgb(52, 211, 153),    // emerald
        status_pending: Color::Rgb(251, 146, 60), // orange
        error: Color::Rgb(255, 85, 85),
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),
        bg_secondary: Color::Rgb(230, 230, 230),
        logo: Color::Rgb(37, 99, 235),
        highlight: Color::Rgb(37, 99, 235),
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        stat_total: Color::Rgb(37, 99, 235),
        status_done: Color::Rgb(5, 150, 105),
        status_pending: Color::Rgb(234, 88, 12),
        error: Color::Rgb(200, 50, 50),
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),           // 背景色
        bg_secondary: Color::Rgb(68, 71, 90), // 选中行
        logo: Color::Rgb(189, 147, 249),      // 紫色
        highlight: Color::Rgb(255, 121, 198), // 粉色
        text: Color::Rgb(248, 248, 242),
        muted: Color::Rgb(98, 114, 164),
        border: Color::Rgb(68, 71, 90),
        stat_total: Color::Rgb(139, 233, 253),
        status_done: Color::Rgb(80, 250, 123),
        status_pending: Color::Rgb(255, 184, 108),
        error: Color::Rgb(255, 85, 85),
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // polar night
        bg_secondary: Color::Rgb(59, 66, 82), // polar night lighter
        logo: Color::Rgb(136, 192, 208),      // frost
        highlight: Color::Rgb(129, 161, 193),
        text: Color::Rgb(236, 239, 244), // snow storm
        muted: Color::Rgb(76, 86, 106),
        border: Color::Rgb(59, 66, 82),
        stat_total: Color::Rgb(136, 192, 208),
        status_done: Color::Rgb(163, 190, 140),   // aurora green
        status_pending: Color::Rgb(235, 203, 139), // aurora yellow
        error: Color::Rgb(191, 97, 106),          // aurora red
    }
}
