use serde::{Deserialize, Serialize};

/// File picked in an upload field. Only the metadata is kept; the contents
/// are never read or sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl FileHandle {
    pub fn size_label(&self) -> String {
        let kb = self.size_bytes as f64 / 1024.0;
        if kb >= 1024.0 {
            format!("{:.1} MB", kb / 1024.0)
        } else {
            format!("{:.0} KB", kb.max(1.0))
        }
    }
}

/// Label for a required upload that has not been picked yet.
pub fn missing_file(label: &'static str, file: &Option<FileHandle>) -> Option<&'static str> {
    file.is_none().then_some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_label() {
        let f = |size_bytes| FileHandle {
            name: "a.pdf".into(),
            size_bytes,
            mime_type: "application/pdf".into(),
        };
        assert_eq!(f(10).size_label(), "1 KB");
        assert_eq!(f(300 * 1024).size_label(), "300 KB");
        assert_eq!(f(3 * 1024 * 1024 / 2).size_label(), "1.5 MB");
    }
}
