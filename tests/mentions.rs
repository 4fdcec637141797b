use twtxt_mentions::{
    expand_mentions, format_mentions, MentionExpander, MentionFormatter, Source,
    SourceDirectory, Style, Styler,
};

struct TagStyler;

impl Styler for TagStyler {
    fn style(&self, text: &str, style: Style) -> String {
        match style {
            Style::Bold => format!("<b>{}</b>", text),
            Style::BoldHighlight => format!("<b class=\"magenta\">{}</b>", text),
        }
    }
}

fn directory() -> SourceDirectory {
    SourceDirectory::new(
        "alice",
        "https://a.example/twtxt.txt",
        vec![
            Source::new("bob", "https://b.example/twtxt.txt"),
            Source::new("carol", "https://c.example/twtxt.txt"),
        ],
    )
}

#[test]
fn text_without_mentions_is_unchanged() {
    let dir = directory();
    for text in ["", "plain status", "mail me at nobody", "1 < 2 > 0 https://x.example"] {
        assert_eq!(expand_mentions(&dir, text), text);
        assert_eq!(format_mentions(&dir, &TagStyler, text), text);
    }
}

#[test]
fn followed_sources_expand_to_canonical_form() {
    let dir = directory();
    for source in dir.followed() {
        let input = format!("@{}", source.nick);
        let expanded = expand_mentions(&dir, &input);
        assert_eq!(expanded, format!("@<{} {}>", source.nick, source.url));
    }
}

#[test]
fn unresolved_nick_is_left_as_typed() {
    let dir = directory();
    assert_eq!(expand_mentions(&dir, "@mallory"), "@mallory");
}

#[test]
fn round_trip_is_bold_without_colour() {
    let dir = directory();
    for source in dir.followed() {
        let input = format!("@{}", source.nick);
        let expanded = expand_mentions(&dir, &input);
        assert_eq!(
            format_mentions(&dir, &TagStyler, &expanded),
            format!("<b>@{}</b>", source.nick)
        );
    }
}

#[test]
fn self_mention_is_highlighted() {
    let dir = directory();
    assert_eq!(
        format_mentions(&dir, &TagStyler, "@<alice https://a.example/twtxt.txt>"),
        "<b class=\"magenta\">@alice</b>"
    );
}

#[test]
fn unresolved_expanded_mention_is_unstyled() {
    let dir = directory();
    assert_eq!(
        format_mentions(&dir, &TagStyler, "@<bob http://unknown.example/twtxt.txt>"),
        "@bob"
    );
}

#[test]
fn embedded_names_suppress_styling() {
    let dir = directory();
    let formatter = MentionFormatter::new(&dir, &TagStyler).embedded_names(true);
    assert_eq!(formatter.format("@<carol https://c.example/twtxt.txt>"), "@carol");
}

#[test]
fn adjacent_mentions_expand_independently() {
    let dir = directory();
    assert_eq!(
        expand_mentions(&dir, "hi @bob and @carol!"),
        "hi @<bob https://b.example/twtxt.txt> and @<carol https://c.example/twtxt.txt>!"
    );
}

#[test]
fn url_only_expansion_round_trips() {
    let dir = directory();
    let expanded = MentionExpander::new(&dir)
        .embed_names(false)
        .expand("cc @carol @alice");
    assert_eq!(
        expanded,
        "cc @<https://c.example/twtxt.txt> @<https://a.example/twtxt.txt>"
    );
    assert_eq!(
        format_mentions(&dir, &TagStyler, &expanded),
        "cc <b>@carol</b> <b class=\"magenta\">@alice</b>"
    );
}
