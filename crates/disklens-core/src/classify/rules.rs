/// Per-platform classification rule tables.
///
/// Each table is an ordered list evaluated top to bottom; the first match
/// wins, so specific matchers (exact basenames, tool-specific cache paths)
/// must precede broader ones (generic cache substrings, bare extensions).
/// Patterns are lowercase and use the separator convention of their
/// platform. Basename rules sit alongside the substring rules because
/// directory rows carry no trailing separator: `node_modules` the directory
/// matches by name, files beneath it match by path substring.
use super::{Category, Matcher, Rule, Safety};

use Category::*;
use Matcher::*;
use Safety::*;

const fn rule(
    category: Category,
    safety: Safety,
    matcher: Matcher,
    reason: &'static str,
    migration_hint: Option<&'static str>,
) -> Rule {
    Rule {
        category,
        safety,
        matcher,
        reason,
        migration_hint,
    }
}

/// Rule table for POSIX-path snapshots.
pub static UNIX_RULES: &[Rule] = &[
    // Temp / backup
    rule(Temp, Safe, ExtIn(&[".tmp", ".temp"]), "Temporary file", None),
    rule(Temp, Safe, NameEndsWith(&["~"]), "Temporary/backup file", None),
    rule(Backup, Check, ExtIn(&[".bak"]), "Backup file", None),
    rule(Backup, Check, ExtIn(&[".old"]), "Old version backup", None),
    rule(Backup, Check, ExtIn(&[".orig"]), "Original backup", None),
    // Package manager and ML caches, most specific first
    rule(Cache, Safe, PathContains(".cache/pip"), "pip cache", Some("Set PIP_CACHE_DIR env var")),
    rule(Cache, Safe, PathContains(".cache/uv"), "uv (Python) cache", Some("Set UV_CACHE_DIR env var")),
    rule(Cache, Safe, PathContains(".cache/huggingface"), "HuggingFace models", Some("Set HF_HOME env var")),
    rule(Cache, Safe, PathContains(".cache/torch"), "PyTorch cache", Some("Set TORCH_HOME env var")),
    rule(Cache, Safe, PathContains(".cache/go-build"), "Go build cache", Some("Set GOCACHE env var")),
    rule(Cache, Safe, PathContains("npm-cache"), "npm cache", Some("npm config set cache ~/cache/npm")),
    rule(Cache, Safe, PathContains(".npm/"), "npm cache", Some("npm config set cache ~/cache/npm")),
    rule(Cache, Safe, NameIs(&[".npm"]), "npm cache", Some("npm config set cache ~/cache/npm")),
    rule(Cache, Safe, PathContains(".yarn/cache"), "Yarn cache", Some("yarn config set cache-folder ~/cache/yarn")),
    rule(Cache, Safe, PathContains(".pnpm/store"), "pnpm store", Some("pnpm config set store-dir ~/cache/pnpm")),
    rule(Cache, Safe, PathContains(".cargo/registry"), "Cargo (Rust) cache", Some("Set CARGO_HOME env var")),
    rule(Cache, Safe, PathContains(".gradle/caches"), "Gradle cache", Some("Set GRADLE_USER_HOME env var")),
    rule(Cache, Safe, PathContains(".m2/repository"), "Maven cache", Some("Set in settings.xml localRepository")),
    rule(Cache, Safe, PathContains(".ollama/models"), "Ollama models", Some("Set OLLAMA_MODELS env var")),
    rule(Cache, Safe, PathContains("library/caches"), "Application caches", None),
    rule(Cache, Safe, PathContains(".cache/"), "Cache directory", None),
    rule(Cache, Safe, NameIs(&[".cache"]), "Cache directory", None),
    // Logs
    rule(Log, Check, ExtIn(&[".log"]), "Log file", None),
    rule(Log, Check, RotatedLog, "Rotated log file", None),
    rule(Log, Check, NameEndsWith(&[".log.gz"]), "Compressed log file", None),
    rule(Log, Check, PathContains("library/logs"), "Application logs", None),
    // Development artifacts
    rule(Dev, Safe, NameIs(&["node_modules"]), "Node.js dependencies", Some("Run npm install to recreate")),
    rule(Dev, Safe, PathContains("node_modules/"), "Node.js dependencies", Some("Run npm install to recreate")),
    rule(Dev, Safe, NameIs(&["__pycache__"]), "Python bytecode cache", Some("Regenerates automatically")),
    rule(Dev, Safe, PathContains("__pycache__/"), "Python bytecode cache", Some("Regenerates automatically")),
    rule(Dev, Safe, ExtIn(&[".pyc"]), "Python compiled file", None),
    rule(Dev, Safe, NameIs(&[".venv"]), "Python virtual env", Some("Recreate with python -m venv")),
    rule(Dev, Safe, PathContains(".venv/"), "Python virtual env", Some("Recreate with python -m venv")),
    rule(Dev, Safe, NameIs(&[".idea"]), "JetBrains IDE cache", None),
    rule(Dev, Safe, PathContains(".idea/"), "JetBrains IDE cache", None),
    rule(Dev, Safe, PathContains(".vs/"), "Visual Studio cache", None),
    rule(Dev, Safe, PathContains("target/debug"), "Rust debug build", Some("cargo build recreates")),
    rule(Dev, Safe, PathContains("target/release"), "Rust release build", Some("cargo build --release recreates")),
    rule(Dev, Safe, PathContains(".git/objects"), "Git objects", Some("Run git gc to optimize")),
    // System / browser data
    rule(System, Check, NameIs(&[".ds_store"]), "macOS folder settings", None),
    rule(System, Check, PathContainsAll(&["library/application support/", "cache"]), "App support cache", None),
    rule(Browser, Safe, PathContains("library/safari"), "Safari data", None),
    // Trash
    rule(System, Check, NameIs(&[".trash"]), "Trash", Some("Empty Trash in Finder")),
    rule(System, Check, PathContains(".trash/"), "Trash", Some("Empty Trash in Finder")),
    // Downloads
    rule(
        Download,
        Check,
        PathContainsExt("downloads/", &[".dmg", ".pkg", ".zip", ".iso", ".tar", ".tgz", ".gz"]),
        "Downloaded installer/archive",
        None,
    ),
    // Duplicates
    rule(Duplicate, Check, NumberedCopy(&[".jpg", ".png", ".mp4", ".mov"]), "Possible duplicate (numbered)", None),
    rule(Duplicate, Check, CopySuffix(&[".jpg", ".png", ".mp4", ".mov"]), "Possible duplicate (copy)", None),
];

/// Rule table for Windows-path snapshots.
pub static WINDOWS_RULES: &[Rule] = &[
    // Temp / backup
    rule(Temp, Safe, ExtIn(&[".tmp", ".temp"]), "Temporary file", None),
    rule(Temp, Safe, NameEndsWith(&["~"]), "Temporary/backup file", None),
    rule(Backup, Check, ExtIn(&[".bak"]), "Backup file", None),
    rule(Backup, Check, ExtIn(&[".old"]), "Old version backup", None),
    rule(Backup, Check, ExtIn(&[".orig"]), "Original backup", None),
    // Package manager and ML caches, most specific first
    rule(Cache, Safe, PathContains("uv\\cache"), "uv (Python) cache", Some("Set UV_CACHE_DIR env var to relocate")),
    rule(Cache, Safe, PathContains("pip\\cache"), "pip cache", Some("Set PIP_CACHE_DIR env var to relocate")),
    rule(Cache, Safe, PathContains("npm-cache"), "npm cache", Some("npm config set cache D:\\cache\\npm")),
    rule(Cache, Safe, PathContains(".npm\\"), "npm cache", Some("npm config set cache D:\\cache\\npm")),
    rule(Cache, Safe, NameIs(&[".npm"]), "npm cache", Some("npm config set cache D:\\cache\\npm")),
    rule(Cache, Safe, PathContains("yarn\\cache"), "Yarn cache", Some("yarn config set cache-folder D:\\cache\\yarn")),
    rule(Cache, Safe, PathContains("pnpm\\store"), "pnpm store", Some("pnpm config set store-dir D:\\cache\\pnpm")),
    rule(Cache, Safe, PathContains(".cargo\\registry"), "Cargo (Rust) cache", Some("Set CARGO_HOME env var")),
    rule(Cache, Safe, PathContains(".gradle\\caches"), "Gradle cache", Some("Set GRADLE_USER_HOME env var")),
    rule(Cache, Safe, PathContains(".m2\\repository"), "Maven cache", Some("Set in settings.xml localRepository")),
    rule(Cache, Safe, PathContains(".nuget\\packages"), "NuGet cache", Some("Set NUGET_PACKAGES env var")),
    rule(Cache, Safe, PathContains("go\\pkg\\mod"), "Go modules cache", Some("Set GOMODCACHE env var")),
    rule(Cache, Safe, PathContains(".cache\\huggingface"), "HuggingFace models", Some("Set HF_HOME env var to relocate")),
    rule(Cache, Safe, PathContains(".cache\\torch"), "PyTorch cache", Some("Set TORCH_HOME env var")),
    rule(Cache, Safe, PathContains(".ollama\\models"), "Ollama models", Some("Set OLLAMA_MODELS env var")),
    rule(Cache, Safe, PathContains("\\cache\\"), "Cache directory", None),
    rule(Cache, Safe, PathContains("\\caches\\"), "Cache directory", None),
    rule(Cache, Safe, NameIs(&["cache", "caches", ".cache"]), "Cache directory", None),
    rule(Cache, Safe, ExtIn(&[".cache"]), "Cache file", None),
    // Logs
    rule(Log, Check, ExtIn(&[".log"]), "Log file", None),
    rule(Log, Check, RotatedLog, "Rotated log file", None),
    rule(Log, Check, NameEndsWith(&[".log.gz"]), "Compressed log file", None),
    // Thumbnails and folder metadata
    rule(System, Safe, NameIs(&["thumbs.db"]), "Windows thumbnail cache", None),
    rule(System, Safe, NameIs(&["desktop.ini"]), "Windows folder settings", None),
    rule(System, Safe, NameIs(&[".ds_store"]), "macOS folder settings", None),
    // Development artifacts
    rule(Dev, Safe, NameIs(&["node_modules"]), "Node.js dependencies", Some("Run npm install to recreate")),
    rule(Dev, Safe, PathContains("node_modules\\"), "Node.js dependencies", Some("Run npm install to recreate")),
    rule(Dev, Safe, PathContains(".git\\objects"), "Git objects", Some("Run git gc to optimize")),
    rule(Dev, Safe, NameIs(&["__pycache__"]), "Python bytecode cache", Some("Regenerates automatically")),
    rule(Dev, Safe, PathContains("__pycache__\\"), "Python bytecode cache", Some("Regenerates automatically")),
    rule(Dev, Safe, ExtIn(&[".pyc"]), "Python compiled file", None),
    rule(Dev, Safe, NameIs(&[".vs"]), "Visual Studio cache", None),
    rule(Dev, Safe, PathContains("\\.vs\\"), "Visual Studio cache", None),
    rule(Dev, Safe, NameIs(&[".idea"]), "JetBrains IDE cache", None),
    rule(Dev, Safe, PathContains("\\.idea\\"), "JetBrains IDE cache", None),
    rule(Dev, Safe, PathContains("\\bin\\debug\\"), "Debug build output", Some("Run build to recreate")),
    rule(Dev, Safe, PathContains("\\bin\\release\\"), "Release build output", Some("Run build to recreate")),
    rule(Dev, Safe, PathContains("\\obj\\"), ".NET build intermediates", None),
    rule(Dev, Safe, PathContains("target\\debug"), "Rust debug build", Some("cargo build recreates")),
    rule(Dev, Safe, PathContains("target\\release"), "Rust release build", Some("cargo build --release recreates")),
    // Downloads
    rule(
        Download,
        Check,
        PathContainsExt("\\downloads\\", &[".exe", ".msi", ".zip", ".7z", ".rar"]),
        "Downloaded installer/archive",
        None,
    ),
    // Browser caches
    rule(Browser, Safe, PathContainsAll(&["\\chrome\\", "cache"]), "Chrome cache", None),
    rule(Browser, Safe, PathContainsAll(&["\\firefox\\", "cache2\\"]), "Firefox cache", None),
    rule(Browser, Safe, PathContainsAll(&["\\edge\\", "cache"]), "Edge cache", None),
    rule(Browser, Safe, PathContainsAll(&["\\brave", "cache"]), "Brave cache", None),
    // System temp directories
    rule(Temp, Safe, PathContains("\\windows\\temp\\"), "Windows temp directory", None),
    rule(Temp, Safe, PathContains("\\appdata\\local\\temp\\"), "User temp directory", None),
    // Docker
    rule(Cache, Safe, PathContainsAll(&["\\docker\\", "cache"]), "Docker build cache", Some("docker builder prune")),
    // Windows system files needing elevation
    rule(System, Admin, PathContains("\\softwaredistribution\\download\\"), "Windows Update downloads", Some("Run Disk Cleanup as admin")),
    rule(System, Admin, NameIs(&["hiberfil.sys"]), "Hibernation file", Some("powercfg /h off (admin) to disable")),
    rule(System, Admin, NameIs(&["pagefile.sys"]), "Page file", Some("Reduce in System Properties > Performance")),
    rule(System, Admin, NameIs(&["swapfile.sys"]), "Swap file", Some("Managed by Windows")),
    // Recycle bin
    rule(System, Check, NameIs(&["$recycle.bin"]), "Recycle bin", Some("Empty recycle bin")),
    rule(System, Check, PathContains("$recycle.bin\\"), "Recycle bin", Some("Empty recycle bin")),
    // Duplicates
    rule(Duplicate, Check, NumberedCopy(&[".jpg", ".png", ".mp4", ".mkv", ".avi", ".mov"]), "Possible duplicate (numbered)", None),
    rule(Duplicate, Check, CopySuffix(&[".jpg", ".png", ".mp4", ".mkv"]), "Possible duplicate (copy)", None),
];
