//! Navigation seam used to send the user to the login route

/// Something that can move the application to another path.
///
/// In the browser this pushes onto the router history.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
