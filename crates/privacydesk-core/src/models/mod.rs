pub mod consent;
pub mod settings;
pub mod snapshot;

pub use consent::ConsentRecord;
pub use settings::{Settings, SettingsPatch, SlaDays, SlaDaysPatch};
pub use snapshot::StateSnapshot;
