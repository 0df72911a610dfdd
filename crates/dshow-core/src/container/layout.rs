pub const VERSION_TOKEN: &str = "Version";
pub const FILE_TYPE_TOKEN: &str = "File Type";
pub const USER_COMMENT_TOKEN: &str = "User Comment";

/// Name/value pairs written by the header encoder.
pub const HEADER_TOKEN_COUNT: i32 = 3;

pub const DEFAULT_VERSION: i32 = 1;
pub const DEFAULT_FILE_TYPE: &str = "D-Show Input Channel";
