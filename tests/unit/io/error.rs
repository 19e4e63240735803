//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use floodgrid::FloodError;
    use floodgrid::io::error::{file_system, invalid_parameter, malformed_input};
    use std::error::Error;

    // Tests invalid parameter errors name the parameter, value and reason
    // Verified by dropping the value from the message
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("threads", &0, &"at least one worker is required");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'threads' = '0': at least one worker is required"
        );
        assert!(err.source().is_none());
    }

    // Tests malformed input errors show the token or end of input
    // Verified by printing an empty token at end of input
    #[test]
    fn test_malformed_input_display() {
        assert_eq!(
            malformed_input("grid size", Some("abc")).to_string(),
            "Malformed input: expected grid size, found 'abc'"
        );
        assert_eq!(
            malformed_input("fill count", None).to_string(),
            "Malformed input: expected fill count, found end of input"
        );
    }

    // Tests file system errors keep the underlying I/O error as their source
    // Verified by returning None for file system sources
    #[test]
    fn test_file_system_error_chains_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = file_system("out/output.ppm", "create output", io);

        assert!(err.to_string().contains("create output"));
        assert!(err.to_string().contains("out/output.ppm"));
        assert!(err.source().is_some());
    }

    // Tests worker, lock and contour error messages
    // Verified by omitting the worker index from the message
    #[test]
    fn test_worker_and_lock_errors() {
        let err = FloodError::WorkerPanicked {
            phase: "coloring",
            worker: 3,
        };
        assert_eq!(err.to_string(), "Worker 3 panicked during coloring");
        assert!(FloodError::LockPoisoned.to_string().contains("poisoned"));
        assert!(
            FloodError::ContourFormat {
                reason: "short".to_string()
            }
            .to_string()
            .ends_with("short")
        );
    }
}
