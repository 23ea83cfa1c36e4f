use qrcode::{Color, QrCode};
use std::error::Error as StdError;

/// Encodes text as a QR matrix for the in-app dialog: the module width plus
/// a row-major bitmap where `true` is a dark module. The caller paints one
/// filled rect per dark module.
pub fn generate_qr_code_data(text: &str) -> Result<(usize, Vec<bool>), Box<dyn StdError>> {
    let code = QrCode::new(text.as_bytes())?;
    let width = code.width();
    let modules: Vec<bool> = code
        .to_colors()
        .into_iter()
        .map(|c| c == Color::Dark)
        .collect();
    Ok((width, modules))
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_is_square() {
        let (width, data) = generate_qr_code_data("hunter2").unwrap();
        assert!(width > 0);
        assert_eq!(data.len(), width * width);
    }

    #[test]
    fn test_matrix_has_both_colors() {
        let (_, data) = generate_qr_code_data("correct horse battery staple").unwrap();
        assert!(data.iter().any(|&m| m));
        assert!(data.iter().any(|&m| !m));
    }

    #[test]
    fn test_same_input_same_matrix() {
        let a = generate_qr_code_data("abc123").unwrap();
        let b = generate_qr_code_data("abc123").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_longer_input_grows_the_matrix() {
        let (small, _) = generate_qr_code_data("short").unwrap();
        let (large, _) = generate_qr_code_data(&"x".repeat(500)).unwrap();
        assert!(large > small);
    }

    #[test]
    fn test_oversized_input_fails_cleanly() {
        // Far beyond QR capacity; must error, not panic
        let huge = "x".repeat(5000);
        assert!(generate_qr_code_data(&huge).is_err());
    }
}
