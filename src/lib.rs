pub mod model;
pub use model::{Int, Binary, Step};

pub mod built_in;
pub use built_in::{BuiltIn, add, subtract};

mod dispatch;
pub use dispatch::{apply};

pub mod condition;
pub use condition::{where_matching};

pub mod driver;

// ----------------------------------------------------------------------------
