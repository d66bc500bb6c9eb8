//! JSON form of dashboard sections.
//!
//! ```json
//! [{"header": "Hardware", "properties": [["CPU", "Ryzen 7"], ["RAM", "16 GB"]]}]
//! ```

use std::io::Write;
use std::path::Path;

use holofetch_core::Section;
use serde::Deserialize;
use serde::Serialize;

use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDto {
    pub header: String,
    #[serde(default)]
    pub properties: Vec<(String, String)>,
}

impl From<&Section> for SectionDto {
    fn from(s: &Section) -> Self {
        Self {
            header: s.header.clone(),
            properties: s.properties.clone(),
        }
    }
}

impl From<SectionDto> for Section {
    fn from(dto: SectionDto) -> Self {
        Self {
            header: dto.header,
            properties: dto.properties,
        }
    }
}

pub fn parse_sections(json: &str) -> Result<Vec<Section>, serde_json::Error> {
    let dtos: Vec<SectionDto> = serde_json::from_str(json)?;
    Ok(dtos.into_iter().map(Section::from).collect())
}

pub fn load_sections(path: &Path) -> Result<Vec<Section>, FetchError> {
    let json = std::fs::read_to_string(path).map_err(|e| FetchError::Sections {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_sections(&json).map_err(|e| FetchError::Sections {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

pub fn write_sections<W: Write>(sections: &[Section], out: &mut W) -> Result<(), FetchError> {
    let dtos: Vec<SectionDto> = sections.iter().map(SectionDto::from).collect();
    serde_json::to_writer_pretty(&mut *out, &dtos)
        .map_err(|e| FetchError::Terminal(e.into()))?;
    writeln!(out).map_err(FetchError::Terminal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections() {
        let sections = parse_sections(
            r#"[{"header": "Hardware", "properties": [["CPU", "X"], ["RAM", "1 GB"]]},
                {"header": "Empty"}]"#,
        )
        .unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].header, "Hardware");
        assert_eq!(
            sections[0].properties,
            vec![("CPU".to_string(), "X".to_string()), ("RAM".to_string(), "1 GB".to_string())]
        );
        assert!(sections[1].is_empty());
    }

    #[test]
    fn test_parse_rejects_objects_for_properties() {
        assert!(parse_sections(r#"[{"header": "H", "properties": {"CPU": "X"}}]"#).is_err());
        assert!(parse_sections(r#"{"header": "H"}"#).is_err());
    }

    #[test]
    fn test_write_then_parse_keeps_order_and_duplicates() {
        let sections = vec![Section::new("Net")
            .with_property("IPv4", "10.0.0.2")
            .with_property("IPv4", "10.0.0.3")];
        let mut out = Vec::new();
        write_sections(&sections, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(parse_sections(&text).unwrap(), sections);
    }

    #[test]
    fn test_load_missing_file_is_sections_error() {
        let err = load_sections(Path::new("/nonexistent/sections.json")).unwrap_err();
        assert!(matches!(err, FetchError::Sections { .. }));
    }
}
