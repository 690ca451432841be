//! Render selection for the navbar.
//!
//! The visible controls are a pure function of three inputs: the viewport
//! class, the session, and the drawer state. [`NavVariant::select`] folds them
//! into one of four tagged variants and [`NavVariant::controls`] lists what
//! that variant renders, in order. The component matches on the variant; it
//! never re-derives these rules.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use super::config::ConfigError;
use super::drawer::DrawerState;
use super::session::{Session, UserProfile};

/// Width at which the navbar switches from the drawer to the full header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Smallest width (px) rendered as desktop.
    pub fn min_width_px(self) -> u32 {
        match self {
            Self::Xs => 576,
            Self::Sm => 768,
            Self::Md => 992,
            Self::Lg => 1200,
            Self::Xl => 1408,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Media queries hiding the desktop-only and mobile-only parts of the
    /// navbar on the wrong side of this breakpoint.
    pub fn visibility_css(self) -> String {
        let min = self.min_width_px();
        format!(
            "@media (max-width: {max}px) {{ .navbar .hidden-mobile {{ display: none !important; }} }}\n\
             @media (min-width: {min}px) {{ .navbar .hidden-desktop, .navbar__drawer {{ display: none !important; }} }}\n",
            max = min - 1,
        )
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|bp| bp.as_str() == wanted)
            .ok_or_else(|| ConfigError::UnknownBreakpoint(s.to_string()))
    }
}

// Same rules as `FromStr`, so config files may write "MD" or " md ".
impl<'de> Deserialize<'de> for Breakpoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Desktop,
    Mobile,
}

impl Viewport {
    pub fn for_width(width_px: u32, breakpoint: Breakpoint) -> Self {
        if width_px < breakpoint.min_width_px() {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Fixed navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavLink {
    Home,
    Deposit,
    Withdraw,
    AllData,
    Login,
    CreateAccount,
}

impl NavLink {
    /// Page links shown in the header (desktop) and the drawer (mobile).
    pub const PAGES: [NavLink; 4] = [Self::Home, Self::Deposit, Self::Withdraw, Self::AllData];

    pub const ALL: [NavLink; 6] = [
        Self::Home,
        Self::Deposit,
        Self::Withdraw,
        Self::AllData,
        Self::Login,
        Self::CreateAccount,
    ];

    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Deposit => "/deposit",
            Self::Withdraw => "/withdraw",
            Self::AllData => "/alldata",
            Self::Login => "/login",
            Self::CreateAccount => "/createaccount",
        }
    }
}

/// One rendered control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Link(NavLink),
    Login,
    SignUp,
    Avatar { initials: String, photo_url: Option<String> },
    DisplayName(String),
    Logout,
    Burger { open: bool },
}

impl Control {
    /// Target of the control when it navigates.
    pub fn href(&self) -> Option<&'static str> {
        match self {
            Self::Link(link) => Some(link.href()),
            Self::Login => Some(NavLink::Login.href()),
            Self::SignUp => Some(NavLink::CreateAccount.href()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavVariant {
    DesktopAnonymous,
    DesktopAuthenticated(UserProfile),
    MobileAnonymous { drawer: DrawerState },
    MobileAuthenticated { profile: UserProfile, drawer: DrawerState },
}

impl NavVariant {
    pub fn select(viewport: Viewport, session: &Session, drawer: DrawerState) -> Self {
        match (viewport, session) {
            (Viewport::Desktop, Session::Anonymous) => Self::DesktopAnonymous,
            (Viewport::Desktop, Session::Authenticated(profile)) => {
                Self::DesktopAuthenticated(profile.clone())
            }
            (Viewport::Mobile, Session::Anonymous) => Self::MobileAnonymous { drawer },
            (Viewport::Mobile, Session::Authenticated(profile)) => Self::MobileAuthenticated {
                profile: profile.clone(),
                drawer,
            },
        }
    }

    pub fn viewport(&self) -> Viewport {
        match self {
            Self::DesktopAnonymous | Self::DesktopAuthenticated(_) => Viewport::Desktop,
            Self::MobileAnonymous { .. } | Self::MobileAuthenticated { .. } => Viewport::Mobile,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::DesktopAuthenticated(profile) | Self::MobileAuthenticated { profile, .. } => {
                Some(profile)
            }
            _ => None,
        }
    }

    /// Drawer state; always closed on desktop.
    pub fn drawer(&self) -> DrawerState {
        match self {
            Self::MobileAnonymous { drawer } | Self::MobileAuthenticated { drawer, .. } => *drawer,
            _ => DrawerState::Closed,
        }
    }

    /// Page links followed by the session controls.
    pub fn menu(&self) -> Vec<Control> {
        let mut controls: Vec<Control> = NavLink::PAGES.into_iter().map(Control::Link).collect();
        match self.profile() {
            Some(profile) => controls.extend([
                Control::Avatar {
                    initials: profile.initials(),
                    photo_url: profile.photo_url.clone(),
                },
                Control::DisplayName(profile.display_name.clone()),
                Control::Logout,
            ]),
            None => controls.extend([Control::Login, Control::SignUp]),
        }
        controls
    }

    /// Every control the variant renders. On mobile only the burger is
    /// visible until the drawer opens.
    pub fn controls(&self) -> Vec<Control> {
        match self.viewport() {
            Viewport::Desktop => self.menu(),
            Viewport::Mobile => {
                let open = self.drawer().is_open();
                let mut controls = vec![Control::Burger { open }];
                if open {
                    controls.extend(self.menu());
                }
                controls
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Session {
        Session::Authenticated(UserProfile {
            display_name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            photo_url: None,
        })
    }

    #[test]
    fn desktop_anonymous_shows_login_and_sign_up() {
        let variant = NavVariant::select(Viewport::Desktop, &Session::Anonymous, DrawerState::Open);
        assert_eq!(variant, NavVariant::DesktopAnonymous);
        let controls = variant.controls();
        assert!(controls.contains(&Control::Login));
        assert!(controls.contains(&Control::SignUp));
        assert!(!controls.contains(&Control::Logout));
    }

    #[test]
    fn desktop_authenticated_shows_avatar_name_and_logout() {
        let variant = NavVariant::select(Viewport::Desktop, &jane(), DrawerState::Closed);
        let controls = variant.controls();
        assert_eq!(
            &controls[4..],
            &[
                Control::Avatar {
                    initials: "JD".into(),
                    photo_url: None
                },
                Control::DisplayName("Jane Doe".into()),
                Control::Logout,
            ]
        );
        assert!(!controls.contains(&Control::Login));
    }

    #[test]
    fn mobile_closed_shows_only_burger() {
        let variant = NavVariant::select(Viewport::Mobile, &jane(), DrawerState::Closed);
        assert_eq!(variant.controls(), vec![Control::Burger { open: false }]);
    }

    #[test]
    fn mobile_open_drawer_lists_links_then_session_controls() {
        let variant = NavVariant::select(Viewport::Mobile, &Session::Anonymous, DrawerState::Open);
        let controls = variant.controls();
        assert_eq!(controls[0], Control::Burger { open: true });
        let links: Vec<_> = controls.iter().filter_map(Control::href).collect();
        assert_eq!(
            links,
            vec!["/", "/deposit", "/withdraw", "/alldata", "/login", "/createaccount"]
        );
    }

    #[test]
    fn viewport_switches_at_breakpoint() {
        assert_eq!(Viewport::for_width(991, Breakpoint::Md), Viewport::Mobile);
        assert_eq!(Viewport::for_width(992, Breakpoint::Md), Viewport::Desktop);
        assert_eq!(Viewport::for_width(1100, Breakpoint::Lg), Viewport::Mobile);
    }

    #[test]
    fn breakpoint_parses_case_insensitively() {
        assert_eq!("MD".parse::<Breakpoint>().unwrap(), Breakpoint::Md);
        assert_eq!(" xl ".parse::<Breakpoint>().unwrap(), Breakpoint::Xl);
        assert!(matches!(
            "huge".parse::<Breakpoint>(),
            Err(ConfigError::UnknownBreakpoint(_))
        ));
    }

    #[test]
    fn visibility_css_uses_breakpoint_width() {
        let css = Breakpoint::Md.visibility_css();
        assert!(css.contains("max-width: 991px"));
        assert!(css.contains("min-width: 992px"));
    }

    #[test]
    fn visibility_css_hides_the_drawer_on_desktop() {
        let css = Breakpoint::Lg.visibility_css();
        let desktop_rule = css
            .lines()
            .find(|line| line.contains("min-width: 1200px"))
            .expect("desktop media query");
        assert!(desktop_rule.contains(".navbar__drawer"));
        assert!(desktop_rule.contains(".navbar .hidden-desktop"));
        let mobile_rule = css
            .lines()
            .find(|line| line.contains("max-width: 1199px"))
            .expect("mobile media query");
        assert!(!mobile_rule.contains(".navbar__drawer"));
    }

    #[test]
    fn breakpoint_deserializes_like_from_str() {
        let bp: Breakpoint = serde_json::from_str(r#""MD""#).unwrap();
        assert_eq!(bp, Breakpoint::Md);
        assert_eq!(serde_json::to_string(&Breakpoint::Xl).unwrap(), r#""xl""#);
        assert!(serde_json::from_str::<Breakpoint>(r#""huge""#).is_err());
    }

    #[test]
    fn link_targets_are_fixed() {
        let hrefs: Vec<_> = NavLink::ALL.iter().map(|l| l.href()).collect();
        assert_eq!(
            hrefs,
            ["/", "/deposit", "/withdraw", "/alldata", "/login", "/createaccount"]
        );
    }
}
