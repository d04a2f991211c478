//! One-shot script and image loaders.
//!
//! Each call settles exactly once. There is no retry, timeout or
//! cancellation.

use crate::core::error::LoadError;
use crate::host::Host;

/// Append a `<script src>` to the page body and wait for it to load.
pub async fn insert_script<H: Host>(host: &H, src: &str) -> Result<(), LoadError> {
    host.insert_script(src).await
}

/// Load an image into memory and return the host's image handle.
pub async fn load_image<H: Host>(host: &H, src: &str) -> Result<H::Image, LoadError> {
    host.load_image(src).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;

    #[tokio::test]
    async fn test_insert_script() {
        let host = MockHost::new().with_failing_resource("https://cdn.example.com/broken.js");

        insert_script(&host, "https://cdn.example.com/sdk.js")
            .await
            .unwrap();
        assert_eq!(
            insert_script(&host, "https://cdn.example.com/broken.js").await,
            Err(LoadError::Script {
                src: "https://cdn.example.com/broken.js".to_string()
            })
        );
        assert_eq!(host.scripts(), vec!["https://cdn.example.com/sdk.js"]);
    }

    #[tokio::test]
    async fn test_load_image() {
        let host = MockHost::new().with_failing_resource("/missing.png");

        assert_eq!(load_image(&host, "/logo.png").await.unwrap(), "/logo.png");
        assert!(matches!(
            load_image(&host, "/missing.png").await,
            Err(LoadError::Image { event, .. }) if event == "error"
        ));
    }
}
