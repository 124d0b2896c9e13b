use eframe::egui::Color32;

pub trait ColorExt {
    fn from_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color32::from_rgb(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_type_colors() {
        assert_eq!(
            Color32::from_hex("#dc3545"),
            Some(Color32::from_rgb(0xdc, 0x35, 0x45))
        );
        assert_eq!(
            Color32::from_hex("28a745"),
            Some(Color32::from_rgb(0x28, 0xa7, 0x45))
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(Color32::from_hex("#fff"), None);
        assert_eq!(Color32::from_hex("#zzzzzz"), None);
    }
}
