/// Static "about" content for the profile tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppInfo {
    pub version: &'static str,
    pub developer: &'static str,
    pub website: &'static str,
    pub email: &'static str,
    pub developer_link: &'static str,
    pub website_link: &'static str,
}

pub const APP_INFO: AppInfo = AppInfo {
    version: env!("CARGO_PKG_VERSION"),
    developer: "Sneakers Store",
    website: "sneakersstore.com",
    email: "hello@sneakersstore.com",
    developer_link: "https://github.com/sneakersstore",
    website_link: "https://sneakersstore.com",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Only some entries open a link.
    pub link: Option<&'static str>,
}

pub fn profile_menu() -> Vec<MenuItem> {
    let info = APP_INFO;
    vec![
        MenuItem {
            title: "App Version",
            subtitle: info.version,
            link: None,
        },
        MenuItem {
            title: "Developer",
            subtitle: info.developer,
            link: Some(info.developer_link),
        },
        MenuItem {
            title: "Website",
            subtitle: info.website,
            link: Some(info.website_link),
        },
        MenuItem {
            title: "Contact Support",
            subtitle: info.email,
            link: None,
        },
        MenuItem {
            title: "Rate App",
            subtitle: "Rate us on Play Store",
            link: None,
        },
        MenuItem {
            title: "Share App",
            subtitle: "Share with friends",
            link: None,
        },
        MenuItem {
            title: "Terms & Conditions",
            subtitle: "Read our terms",
            link: None,
        },
        MenuItem {
            title: "Privacy Policy",
            subtitle: "Read our privacy policy",
            link: None,
        },
    ]
}
