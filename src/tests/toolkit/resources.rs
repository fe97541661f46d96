use std::path::PathBuf;

/// Path to a Y2000 test resource
pub fn test_resource(name: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("test_resources")
        .join("Y2000")
        .join(name)
}

/// Reads a Y2000 test resource entirely
pub fn read_test_resource(name: &str) -> String {
    let path = test_resource(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read \"{}\": {}", path.display(), e))
}
