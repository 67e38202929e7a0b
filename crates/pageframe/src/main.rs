use dioxus::prelude::*;
use pageframe::components::App as PageframeApp;

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/pageframe.css");

#[cfg(feature = "profile")]
const TRACE_FILE: &str = "./trace.json";

/// Crates whose spans end up in the trace; dioxus internals stay out of it.
#[cfg(feature = "profile")]
const TRACED_CRATES: [&str; 2] = ["pageframe", "pageframe_core"];

/// `EnvFilter` directives enabling `level` for the workspace crates only.
#[cfg(feature = "profile")]
fn workspace_directives(level: &str) -> String {
    TRACED_CRATES
        .map(|name| format!("{name}={level}"))
        .join(",")
}

/// Chrome trace output plus a console layer.
/// The returned guard flushes the trace file on drop, so hold it until exit.
#[cfg(feature = "profile")]
fn init_profiling() -> tracing_chrome::FlushGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let (chrome_layer, guard) = tracing_chrome::ChromeLayerBuilder::new()
        .file(TRACE_FILE)
        .include_args(true)
        .build();

    tracing_subscriber::registry()
        .with(chrome_layer.with_filter(EnvFilter::new(workspace_directives("trace"))))
        .with(fmt::layer().with_filter(EnvFilter::new(workspace_directives("info"))))
        .init();

    tracing::info!(file = TRACE_FILE, "Chrome tracing enabled");
    guard
}

fn main() {
    #[cfg(feature = "profile")]
    let _profiling_guard = init_profiling();

    // DEBUG for development builds, INFO for release builds
    #[cfg(not(feature = "profile"))]
    {
        #[cfg(debug_assertions)]
        dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
        #[cfg(not(debug_assertions))]
        dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
        use pageframe_core::config::{
            APP_TITLE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH,
        };

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title(APP_TITLE)
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .with_min_inner_size(LogicalSize::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        );

        dioxus::logger::tracing::info!("Launching {} (desktop)", APP_TITLE);
        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    // `web` is a default feature; an explicit `desktop` build takes precedence
    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::logger::tracing::info!("Launching {} (web)", pageframe_core::config::APP_TITLE);
        dioxus::launch(App);
    }

    #[cfg(not(any(feature = "web", feature = "desktop")))]
    dioxus::logger::tracing::error!(
        "No renderer enabled; build with `--features web` or `--features desktop`"
    );
}

/// Host bootstrap: links the favicon and stylesheet, then mounts the shell once.
#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }

        // CSS loading: asset! macro has issues on desktop, use include_str! as workaround
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/pageframe.css")} }
        }

        PageframeApp {}
    }
}
