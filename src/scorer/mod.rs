pub mod ioc;
pub mod loader;
pub mod trigram;

pub use self::ioc::index_of_coincidence;
pub use self::trigram::TrigramModel;
