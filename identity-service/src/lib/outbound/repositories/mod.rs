pub mod identity;
pub mod in_memory;

pub use identity::PostgresIdentityRepository;
pub use in_memory::InMemoryIdentityRepository;
