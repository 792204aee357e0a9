pub mod cookie;
#[cfg(test)]
mod memory;

#[cfg(test)]
pub use memory::MemoryStore;

/// Client-local key-value storage. Values are plain strings; callers own
/// the encoding. Writes are visible to later reads through the same store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}
