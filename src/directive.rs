//! Classification of a single line as an include directive or plain text.

/// Which delimiter form a directive used. The form decides the resolution
/// order: quoted directives try the including file's own directory first,
/// angled directives never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IncludeKind {
    Quoted,
    Angled,
}

/// An include directive extracted from one line. The referenced path is
/// kept as raw text; resolution happens later against the search path.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Include {
    kind: IncludeKind,
    path: String,
}

impl Include {
    pub fn kind(&self) -> IncludeKind {
        self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Matches a whole line against the two directive forms, allowing arbitrary
/// whitespace around the `#`, the `include` keyword and the delimiters.
/// Directives never span lines. Returns `None` for plain text.
pub(crate) fn match_directive(line: &str) -> Option<Include> {
    let quoted = lazy_regex::regex!(r#"^\s*#\s*include\s*"([^"]*)"\s*$"#);
    let angled = lazy_regex::regex!(r"^\s*#\s*include\s*<([^>]*)>\s*$");

    if let Some(capture) = quoted.captures(line) {
        return Some(Include {
            kind: IncludeKind::Quoted,
            path: capture.get(1).unwrap().as_str().to_owned(),
        });
    }

    angled.captures(line).map(|capture| Include {
        kind: IncludeKind::Angled,
        path: capture.get(1).unwrap().as_str().to_owned(),
    })
}

#[cfg(test)]
mod test_match_directive {
    use super::{match_directive, IncludeKind};
    use rstest::rstest;

    #[rstest]
    #[case(r#"#include "dir1/b.h""#, "dir1/b.h")]
    #[case(r#"  #  include   "b.h"  "#, "b.h")]
    #[case("\t#\tinclude\t\"b.h\"\t", "b.h")]
    #[case(r#"#include """#, "")]
    fn should_match_quoted_directives(#[case] line: &str, #[case] path: &str) {
        let include = match_directive(line).expect("expected a directive");
        assert_eq!(include.kind(), IncludeKind::Quoted);
        assert_eq!(include.path(), path);
    }

    #[rstest]
    #[case("#include <std1.h>", "std1.h")]
    #[case("#   include<dummy.txt>", "dummy.txt")]
    #[case("  # include  <lib/std2.h>  ", "lib/std2.h")]
    fn should_match_angled_directives(#[case] line: &str, #[case] path: &str) {
        let include = match_directive(line).expect("expected a directive");
        assert_eq!(include.kind(), IncludeKind::Angled);
        assert_eq!(include.path(), path);
    }

    #[rstest]
    #[case("// this comment before include")]
    #[case("int SayHello() {")]
    #[case("")]
    #[case("#include")]
    #[case(r#"#include "unterminated"#)]
    #[case("#include <unterminated")]
    #[case(r#"#include "b.h" trailing"#)]
    #[case(r#"xx #include "b.h""#)]
    #[case(r#"#include <mixed.h>""#)]
    fn should_treat_everything_else_as_plain_text(#[case] line: &str) {
        assert_eq!(match_directive(line), None);
    }
}
