//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default session token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Cookie carrying the session token issued on login
pub const SESSION_COOKIE_NAME: &str = "SESSION";

/// Body returned by a successful login
pub const LOGIN_SUCCESS_MESSAGE: &str = "User logged in successfully";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// Document Store (MongoDB)
// =============================================================================

/// Default MongoDB connection URL (for development)
pub const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";

/// Default database name
pub const DEFAULT_MONGODB_DATABASE: &str = "todoapp";

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";

/// Collection holding item documents
pub const ITEMS_COLLECTION: &str = "items";

/// Unique index names, also used to tell which field collided on insert
pub const USERNAME_INDEX: &str = "username_unique";
pub const EMAIL_INDEX: &str = "email_unique";

/// Secondary index for owner lookups
pub const OWNER_INDEX: &str = "owner_id_idx";

/// Driver pool bounds
pub const MONGODB_MAX_POOL_SIZE: u32 = 100;
pub const MONGODB_MIN_POOL_SIZE: u32 = 5;

/// Driver timeouts in seconds
pub const MONGODB_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const MONGODB_SERVER_SELECTION_TIMEOUT_SECS: u64 = 30;

/// MongoDB server error code for unique index violations
pub const DUPLICATE_KEY_ERROR_CODE: i32 = 11000;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 1;
