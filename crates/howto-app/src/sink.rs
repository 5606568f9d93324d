use howto_core::Result;

/// Where page metadata lands. This stands in for the document head: a
/// title, a single description tag, and a single JSON-LD structured
/// data block.
///
/// Setters upsert: a missing backing slot is created on first write.
/// The structured-data block is replaced wholesale on every write and
/// removed when the tutorial page is left.
pub trait MetadataSink {
    fn set_title(&mut self, title: &str) -> Result<()>;
    fn set_description(&mut self, description: &str) -> Result<()>;
    fn set_structured_data(&mut self, json_ld: &str) -> Result<()>;
    fn clear_structured_data(&mut self) -> Result<()>;

    fn title(&self) -> Option<String>;
    fn description(&self) -> Option<String>;
    fn structured_data(&self) -> Option<String>;
}

/// In-process sink. Holds the metadata in plain fields so callers can
/// read back what the controller last published.
#[derive(Debug, Default)]
pub struct MemorySink {
    title: Option<String>,
    description: Option<String>,
    structured_data: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataSink for MemorySink {
    fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = Some(title.to_string());
        Ok(())
    }

    fn set_description(&mut self, description: &str) -> Result<()> {
        self.description = Some(description.to_string());
        Ok(())
    }

    fn set_structured_data(&mut self, json_ld: &str) -> Result<()> {
        self.structured_data = Some(json_ld.to_string());
        Ok(())
    }

    fn clear_structured_data(&mut self) -> Result<()> {
        self.structured_data = None;
        Ok(())
    }

    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn description(&self) -> Option<String> {
        self.description.clone()
    }

    fn structured_data(&self) -> Option<String> {
        self.structured_data.clone()
    }
}
