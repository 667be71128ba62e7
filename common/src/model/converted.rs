use super::Identified;

/// The PDF produced from one pending file.
///
/// `name` is the storage token the server assigned to the PDF; it is what
/// download and merge requests refer to. `original_name` is the display name
/// of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub name: String,
    pub original_name: String,
}

impl ConvertedFile {
    pub fn new(name: impl Into<String>, original_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original_name: original_name.into(),
        }
    }
}

// Two conversions of identically named files get the same storage token, so
// the token alone is not unique. The pair is what the list can tell apart.
impl Identified for ConvertedFile {
    type Id = (String, String);

    fn identity(&self) -> Self::Id {
        (self.name.clone(), self.original_name.clone())
    }
}
