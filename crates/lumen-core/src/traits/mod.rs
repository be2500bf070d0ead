mod clock;
mod remote;
mod storage;

pub use clock::{FixedClock, IClock, SystemClock};
pub use remote::{IRemoteDirectory, IRemoteTrending, OfflineRemote};
pub use storage::IKeyValueStore;
