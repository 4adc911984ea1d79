pub mod collection;
pub mod marketplace;
pub mod seed;

pub use collection::MemoryCollection;
pub use marketplace::MarketplaceStore;
