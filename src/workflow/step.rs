/// The ordered steps of the authoring workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Write the usage document and the launch script
    #[default]
    Compose,
    /// Fill in the manifest
    Describe,
    /// Pick a packaging mode and download
    Export,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Compose, Step::Describe, Step::Export];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Step> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Compose => "Edit template",
            Step::Describe => "Describe bundle",
            Step::Export => "Download files",
        }
    }
}
