//! GraphQL documents sent to the content backend.

/// Site theme: header menu and its entries.
pub const GET_THEME: &str = r#"
query getTheme {
  getTheme {
    headerMenu {
      label
      menuEntries {
        _id
        label
        url
      }
    }
  }
}
"#;

/// Home page copy and hero photos.
pub const GET_HOME: &str = r#"
query getHome {
  getHome {
    overlay
    photoPortrait {
      url
      title
    }
    photoLandscape {
      url
      title
    }
  }
}
"#;
