pub mod snapshot_loader;
