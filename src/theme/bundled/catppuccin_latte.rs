//! Catppuccin Latte - Soothing pastel light theme

pub const THEME: &str = r##"# Catppuccin Latte theme for termtheme
# Soothing pastel light theme

[meta]
name = "Catppuccin Latte"
version = 1
author = "Catppuccin"

[colors]
color0 = "#5c5f77"    # black
color1 = "#d20f39"    # red
color2 = "#40a02b"    # green
color3 = "#df8e1d"    # yellow
color4 = "#1e66f5"    # blue
color5 = "#ea76cb"    # magenta
color6 = "#179299"    # cyan
color7 = "#acb0be"    # white
color8 = "#6c6f85"    # bright_black
color9 = "#de293e"    # bright_red
color10 = "#49af3d"   # bright_green
color11 = "#eea02d"   # bright_yellow
color12 = "#456eff"   # bright_blue
color13 = "#fe85d8"   # bright_magenta
color14 = "#2d9fa8"   # bright_cyan
color15 = "#bcc0cc"   # bright_white
foreground = "#4c4f69"
background = "#eff1f5"
cursor = "#dc8a78"
selection = "#acb0be"
"##;
