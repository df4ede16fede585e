//! Library fixtures matching the built-in manifest.

/// Charting library source, relative to the project root
pub const PLOTLY_SRC: &str = "node_modules/plotly.js/dist/plotly.js";
/// CSS framework runtime source
pub const TAILWIND_SRC: &str = "node_modules/tailwindcss/dist/tailwind.min.js";
/// Icon set source
pub const LUCIDE_SRC: &str = "node_modules/lucide/dist/umd/lucide.js";

pub const PLOTLY_DEST: &str = "static/js/plotly.js";
pub const TAILWIND_DEST: &str = "static/js/tailwind.min.js";
pub const LUCIDE_DEST: &str = "static/js/lucide.js";

pub const PLOTLY_JS: &str = "/* plotly.js v2.35.2 */\n(function(){window.Plotly={newPlot:function(){}};})();\n";
pub const TAILWIND_JS: &str = "/*! tailwindcss v3.4.1 | MIT License */\n(()=>{var e={};})();\n";
pub const LUCIDE_JS: &str = "/** lucide v0.460.0 */\n(function(g){g.lucide={createIcons:function(){}};})(this);\n";
