use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Information about a decoded image, as printed by `--probe`
pub struct ImageInfo<'a> {
    pub file:       &'a str,
    pub size:       u64,
    pub format:     &'static str,
    pub width:      usize,
    pub height:     usize,
    pub channels:   usize,
    pub colorspace: Option<String>
}

impl<'a> Serialize for ImageInfo<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageInfo", 7)?;

        state.serialize_field("file", self.file)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("format", self.format)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("channels", &self.channels)?;
        state.serialize_field("colorspace", &self.colorspace)?;

        state.end()
    }
}
