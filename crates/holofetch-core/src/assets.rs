//! Built-in art used when the caller supplies none.

/// Cyclic texture installed on `#`-bearing avatars that come without one.
pub const DEFAULT_IMAGE_TEXTURE: &str = "holo@fetch@";

/// Banner drawn above the sections when no header art is configured.
pub const DEFAULT_HEADER: &str = r#"                                                                
  _               _            __          _            _       
 | |__     ___   | |   ___    / _|   ___  | |_    ___  | |__    
 | '_ \   / _ \  | |  / _ \  | |_   / _ \ | __|  / __| | '_ \   
 | | | | | (_) | | | | (_) | |  _| |  __/ | |_  | (__  | | | |  
 |_| |_|  \___/  |_|  \___/  |_|    \___|  \__|  \___| |_| |_|  
                                                                
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::split_lines;

    #[test]
    fn test_default_header_lines_share_one_width() {
        let lines = split_lines(DEFAULT_HEADER);
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
    }

    #[test]
    fn test_default_texture_has_no_placeholder() {
        assert!(!DEFAULT_IMAGE_TEXTURE.contains('#'));
    }
}
