use std::path::Path;

/// Extension trait for Path
pub trait PathExt {
    /// Returns the last component of the path as a String.
    ///
    /// Paths without a final component (`/`, `..`, empty) yield the whole
    /// path rendered with `display()`.
    ///
    /// # Examples
    /// ```
    /// use boilerkit::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert_eq!(Path::new("src/main.c").basename(), "main.c");
    /// assert_eq!(Path::new("main.c").basename(), "main.c");
    /// ```
    fn basename(&self) -> String;
}

impl PathExt for Path {
    fn basename(&self) -> String {
        match self.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_strips_directories() {
        assert_eq!(Path::new("/home/user/project/hello.py").basename(), "hello.py");
        assert_eq!(Path::new("hello.py").basename(), "hello.py");
    }

    #[test]
    fn test_basename_without_file_name() {
        assert_eq!(Path::new("/").basename(), "/");
    }
}
