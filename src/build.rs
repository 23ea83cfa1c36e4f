// build.rs
fn main() {
    #[cfg(target_os = "windows")]
    {
        // Embed the app icon into the .exe when one is present
        let icon = std::path::Path::new("assets/icon.ico");
        if icon.exists() {
            let mut res = winres::WindowsResource::new();
            res.set_icon("assets/icon.ico");
            res.compile().expect("Failed to embed icon!");
        }
    }
}
