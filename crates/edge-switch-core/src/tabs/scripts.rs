//! JXA sources run against the browser's scripting dictionary.
//!
//! Every script binds `app` to the browser and prints one JSON document.
//! Window and tab positions are 1-based on the Rust side and converted here.

const APP_NAME_PLACEHOLDER: &str = "__APP_NAME__";

const LIST_TABS: &str = r#"
(() => {
    const appName = __APP_NAME__;
    const app = Application(appName);
    if (!app.running()) {
        return JSON.stringify({tabs: []});
    }

    const escaped = appName.replace(/[.*+?^${}()|[\]\\]/g, "\\$&");
    const titlePattern = new RegExp(" - " + escaped + " - ([^-]+)$");
    let seWindows = [];
    try {
        seWindows = Application("System Events").processes.byName(appName).windows();
    } catch (e) {}

    const tabs = [];
    try {
        const windows = app.windows();
        for (let i = 0; i < windows.length; i++) {
            const win = windows[i];
            let profileName = null;
            try {
                if (i < seWindows.length) {
                    const match = seWindows[i].title().match(titlePattern);
                    if (match) {
                        profileName = match[1].trim();
                    }
                }
            } catch (e) {}

            const activeIndex = win.activeTabIndex();
            const windowTabs = win.tabs();
            for (let j = 0; j < windowTabs.length; j++) {
                tabs.push({
                    title: windowTabs[j].title(),
                    url: windowTabs[j].url(),
                    windowIndex: i + 1,
                    windowId: win.id(),
                    windowName: win.name(),
                    tabIndex: j + 1,
                    active: j + 1 === activeIndex,
                    profileName: profileName
                });
            }
        }
    } catch (e) {
        return JSON.stringify({error: e.toString()});
    }
    return JSON.stringify({tabs: tabs});
})();
"#;

const WINDOW_NAMES: &str = r#"
(() => {
    const app = Application(__APP_NAME__);
    let names = [];
    try {
        if (app.running()) {
            names = app.windows().map(w => w.name());
        }
    } catch (e) {}
    return JSON.stringify(names);
})();
"#;

const ACTIVATE: &str = r#"
(() => {
    Application(__APP_NAME__).activate();
    return "";
})();
"#;

/// Shared prologue of the per-tab scripts: resolves `win`, `tabs` and
/// `tabIdx` or returns a range failure.
const LOCATE_TAB: &str = r#"
    const app = Application(__APP_NAME__);
    if (!app.running()) {
        return JSON.stringify({ok: false, reason: "not_running"});
    }
    const windows = app.windows();
    const winIdx = __WINDOW_INDEX__ - 1;
    if (winIdx < 0 || winIdx >= windows.length) {
        return JSON.stringify({ok: false, reason: "window", count: windows.length});
    }
    const win = windows[winIdx];
    const tabs = win.tabs();
    const tabIdx = __TAB_INDEX__ - 1;
    if (tabIdx < 0 || tabIdx >= tabs.length) {
        return JSON.stringify({ok: false, reason: "tab", count: tabs.length});
    }
"#;

const SELECT_TAB: &str = r#"
        win.activeTabIndex = tabIdx + 1;
"#;

const FRONT_TAB: &str = r#"
        app.activate();
        win.index = 1;
        win.activeTabIndex = tabIdx + 1;
"#;

const CLOSE_TAB: &str = r#"
        tabs[tabIdx].close();
"#;

fn quote(app_name: &str) -> String {
    serde_json::Value::String(app_name.to_string()).to_string()
}

fn per_tab(app_name: &str, window_index: usize, tab_index: usize, body: &str) -> String {
    let locate = LOCATE_TAB
        .replace(APP_NAME_PLACEHOLDER, &quote(app_name))
        .replace("__WINDOW_INDEX__", &window_index.to_string())
        .replace("__TAB_INDEX__", &tab_index.to_string());

    format!(
        "(() => {{\n    try {{{locate}{body}        return JSON.stringify({{ok: true}});\n    }} catch (e) {{\n        return JSON.stringify({{ok: false, reason: \"error\", message: e.toString()}});\n    }}\n}})();\n"
    )
}

/// Every tab of every window, plus the profile name from the window title.
pub fn list_tabs(app_name: &str) -> String {
    LIST_TABS.replace(APP_NAME_PLACEHOLDER, &quote(app_name))
}

/// Names of the open browser windows.
pub fn window_names(app_name: &str) -> String {
    WINDOW_NAMES.replace(APP_NAME_PLACEHOLDER, &quote(app_name))
}

pub fn activate(app_name: &str) -> String {
    ACTIVATE.replace(APP_NAME_PLACEHOLDER, &quote(app_name))
}

/// Make a tab the active one in its window without reordering windows.
pub fn select_tab(app_name: &str, window_index: usize, tab_index: usize) -> String {
    per_tab(app_name, window_index, tab_index, SELECT_TAB)
}

/// Activate the browser, move the window to the front and select the tab.
pub fn front_tab(app_name: &str, window_index: usize, tab_index: usize) -> String {
    per_tab(app_name, window_index, tab_index, FRONT_TAB)
}

pub fn close_tab(app_name: &str, window_index: usize, tab_index: usize) -> String {
    per_tab(app_name, window_index, tab_index, CLOSE_TAB)
}
