use event_marker::analytics_event;

#[analytics_event]
#[derive(Debug, Clone, PartialEq)]
pub enum MyEvent {
    ShareImage { image_name: String, full_string: String },
    ButtonTapped,
}

#[analytics_event]
pub enum NoVariants {}

#[analytics_event]
pub struct NotASet {
    pub id: u32,
}

#[analytics_event]
#[non_exhaustive]
pub enum OpenSet {
    Started,
}

pub enum Unmarked {
    Ignored { value: i32 },
}

pub mod search {
    use event_marker::analytics_event;

    #[analytics_event]
    pub enum SearchEvent {
        Query { text: String, result_count: u32 },
        Moved(u32, u32),
        Cleared,
    }
}
