//! Platform-appropriate login-key storage.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Native**: one file per key under `<data_dir>/examhub/` via [`store::FileStore`]

/// Open the session store for this platform.
pub fn make_session() -> store::Session<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Session::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::Session::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("examhub");
        store::Session::new(store::FileStore::new(base))
    }
}
