//! Deprecated React Native and React APIs, detected by name.

use crate::models::{Category, Finding, ScanTarget, Severity};

/// A removed or deprecated API and what replaces it.
#[derive(Debug, Clone, Copy)]
pub struct DeprecatedApi {
    /// Identifier searched for verbatim in the file text.
    pub name: &'static str,
    pub replacement: &'static str,
    pub severity: Severity,
}

/// No entry's name contains another entry's name, so each API yields at most
/// one finding per file.
pub static DEPRECATED_APIS: &[DeprecatedApi] = &[
    DeprecatedApi {
        name: "ListView",
        replacement: "FlatList or SectionList",
        severity: Severity::High,
    },
    DeprecatedApi {
        name: "NavigatorIOS",
        replacement: "React Navigation (@react-navigation/native)",
        severity: Severity::High,
    },
    DeprecatedApi {
        name: "createClass",
        replacement: "an ES6 class or a function component",
        severity: Severity::Critical,
    },
    DeprecatedApi {
        name: "React.PropTypes",
        replacement: "the prop-types package or TypeScript types",
        severity: Severity::High,
    },
    DeprecatedApi {
        name: "componentWillMount",
        replacement: "componentDidMount or a useEffect hook",
        severity: Severity::Medium,
    },
    DeprecatedApi {
        name: "componentWillReceiveProps",
        replacement: "getDerivedStateFromProps or componentDidUpdate",
        severity: Severity::Medium,
    },
    DeprecatedApi {
        name: "componentWillUpdate",
        replacement: "componentDidUpdate with getSnapshotBeforeUpdate",
        severity: Severity::Medium,
    },
    DeprecatedApi {
        name: "DatePickerIOS",
        replacement: "@react-native-community/datetimepicker",
        severity: Severity::Medium,
    },
    DeprecatedApi {
        name: "DatePickerAndroid",
        replacement: "@react-native-community/datetimepicker",
        severity: Severity::Medium,
    },
    DeprecatedApi {
        name: "TimePickerAndroid",
        replacement: "@react-native-community/datetimepicker",
        severity: Severity::Medium,
    },
    DeprecatedApi {
        name: "ProgressBarAndroid",
        replacement: "ActivityIndicator or @react-native-community/progress-bar-android",
        severity: Severity::Medium,
    },
    DeprecatedApi {
        name: "ProgressViewIOS",
        replacement: "@react-native-community/progress-view",
        severity: Severity::Medium,
    },
    DeprecatedApi {
        name: "ViewPagerAndroid",
        replacement: "react-native-pager-view",
        severity: Severity::Medium,
    },
    DeprecatedApi {
        name: "ToolbarAndroid",
        replacement: "a custom header or React Navigation's header",
        severity: Severity::Medium,
    },
    DeprecatedApi {
        name: "AlertIOS",
        replacement: "Alert",
        severity: Severity::Medium,
    },
    DeprecatedApi {
        name: "PushNotificationIOS",
        replacement: "@react-native-community/push-notification-ios",
        severity: Severity::Medium,
    },
    DeprecatedApi {
        name: "CameraRoll",
        replacement: "@react-native-camera-roll/camera-roll",
        severity: Severity::Medium,
    },
];

pub fn evaluate(target: &ScanTarget) -> Vec<Finding> {
    DEPRECATED_APIS
        .iter()
        .filter(|api| target.content.contains(api.name))
        .map(|api| {
            Finding::new(
                target.path.clone(),
                Category::Deprecated,
                api.severity,
                format!("Deprecated API `{}` is used", api.name),
                format!("Replace `{}` with {}", api.name, api.replacement),
            )
        })
        .collect()
}
