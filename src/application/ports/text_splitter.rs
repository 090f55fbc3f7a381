pub trait TextSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<String>;
}
