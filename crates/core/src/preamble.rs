//! The fixed system preamble and the default macro block.

use crate::options::DocumentOptions;
use texloom_types::Fragment;

/// Column types and helper commands used by the generators.
const CONFIGURATION: [&str; 7] = [
    "\\setlength{\\parskip}{0em}",
    "\\keepXColumns",
    "\\newenvironment{frcseries}{\\fontfamily{pzc}\\selectfont}{}",
    "\\newcommand{\\textcur}[1]{{\\itshape\\frcseries#1}}",
    "\\newcolumntype{g}{>{\\vfill\\centering}X}",
    "\\newcolumntype{Y}{>{\\vfill\\RaggedRight\\arraybackslash}X}",
    "\\newcolumntype{Z}{>{\\vfill\\centering\\arraybackslash}X}",
];

/// `\lst {label}{text} ... \stoplst` lays out a hanging description list.
const LIST_MACROS: &str = "\\makeatletter
\\newcommand{\\lst}{
\\paragraph{ }
\\hfill\\begin{minipage}{\\dimexpr\\textwidth-1cm}
\\begin{description}
\\setlength\\itemsep{1em}
\\@lsti
}
\\newcommand\\@lsti{
\\@ifnextchar\\stoplst{\\@lstsend}{\\@lstii}}
\\newcommand\\@lstii[2]{
\\@lstiii{#1}{#2}\\hfill
\\@lsti
}
\\newcommand\\@lstiii[2]{\\item[#1]#2
}
\\newcommand\\@lstsend[1]{
\\end{description}
\\xdef\\tpd{\\the\\prevdepth}
\\end{minipage}
}
\\makeatother";

pub(crate) fn system(options: &DocumentOptions) -> Vec<Fragment> {
    let mut out = vec![Fragment::from("\\batchmode")];

    if options.class_options.is_empty() {
        out.push(Fragment::from(format!("\\documentclass{{{}}}", options.document_class)));
    } else {
        out.push(Fragment::from(format!(
            "\\documentclass[{}]{{{}}}",
            options.class_options.join(","),
            options.document_class
        )));
    }

    out.extend(options.packages.iter().map(|p| p.to_fragment()));

    if let Some(path) = &options.graphics_path {
        out.push(graphics_path(path));
    }

    out.extend(CONFIGURATION.iter().map(|line| Fragment::from(*line)));

    if let Some(mark) = options.watermark.as_ref().filter(|_| !options.export) {
        out.push(Fragment::from("\\usepackage{draftwatermark}"));
        out.push(Fragment::from(format!("\\SetWatermarkText{{{}}}", mark.text)));
        out.push(Fragment::from(format!("\\SetWatermarkScale{{{}}}", mark.scale)));
    }

    out
}

pub(crate) fn list_macros() -> Fragment {
    Fragment::from(LIST_MACROS)
}

/// `\graphicspath` wants each directory braced and slash-terminated.
fn graphics_path(path: &str) -> Fragment {
    let dir = if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    };
    Fragment::from(format!("\\graphicspath{{{{{}}}}}", dir))
}
