//! Installs the global file logger; kept in its own test binary because the
//! logger can only be set once per process.

use keyword_logging::{initialize_at, kw_debug, kw_info, LogDestination};
use log::LevelFilter;

#[test]
fn file_destination_writes_messages_at_or_above_level() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("keyword.log");

    initialize_at(LogDestination::File, LevelFilter::Info, &path);
    kw_info!("analysis finished with {} keywords", 3);
    kw_debug!("hidden detail");
    log::logger().flush();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("analysis finished with 3 keywords"), "{contents}");
    assert!(contents.contains("INFO"), "{contents}");
    assert!(!contents.contains("hidden detail"), "{contents}");
}
