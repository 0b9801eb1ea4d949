//! Title banner shown when the program starts.

use crate::tui::settings;
use crate::tui::text::{lerp_rgb, Span, SpanStyle, StyledLine};

const TITLE_ART: &str = r#" _   _                            ____   _              __   __  _
| \ | |  __ _  _ __ ___    ___   / ___| | |__   _   _  / _| / _|| |  ___  _ __
|  \| | / _` || '_ ` _ \  / _ \  \___ \ | '_ \ | | | || |_ | |_ | | / _ \| '__|
| |\  || (_| || | | | | ||  __/   ___) || | | || |_| ||  _||  _|| ||  __/| |
|_| \_| \__,_||_| |_| |_| \___|  |____/ |_| |_| \__,_||_|  |_|  |_| \___||_|"#;

/// Banner rows with a vertical pastel gradient applied line by line.
pub fn title_lines() -> Vec<StyledLine> {
    let rows: Vec<&str> = TITLE_ART.lines().collect();
    let last = rows.len().saturating_sub(1).max(1) as f32;
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let color = lerp_rgb(
                settings::RGB_TITLE_START,
                settings::RGB_TITLE_END,
                idx as f32 / last,
            );
            StyledLine::from(Span::styled(*row, SpanStyle::fg(color)))
        })
        .collect()
}
