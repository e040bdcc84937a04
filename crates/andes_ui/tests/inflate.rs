//! Inflating whole layouts

use std::sync::Arc;

use andes_theme::{AndesTheme, ColorToken};
use andes_ui::markup::{self, Widget};
use andes_ui::prelude::*;

const LAYOUT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android"
    xmlns:app="http://schemas.android.com/apk/res-auto"
    android:orientation="vertical">

    <TextView android:text="Buttons" />

    <AndesButton
        android:id="@+id/loud"
        app:andesButtonText="Loud" />

    <AndesButton
        android:id="@+id/transparent_small"
        app:andesButtonHierarchy="transparent"
        app:andesButtonSize="small"
        app:andesButtonEnabled="false"
        app:andesButtonText="Small" />

    <AndesButton
        android:id="@+id/with_icon"
        app:andesButtonLeftIconCustom="@drawable/andesui_icon"
        app:andesButtonText="Icon" />

    <com.mercadolibre.android.andesui.message.AndesMessage
        android:id="@+id/error"
        app:andesMessageHierarchy="1001"
        app:andesMessageState="2003"
        app:andesMessageTitleText="Something failed"
        app:andesMessageBodyText="@string/error_body"
        app:andesMessageDismissable="true" />
</LinearLayout>
"#;

fn inflate() -> Vec<markup::InflatedView> {
    markup::inflate(LAYOUT, Arc::new(AndesTheme::andes())).unwrap()
}

#[test]
fn test_inflates_in_document_order() {
    let views = inflate();
    let ids: Vec<_> = views.iter().map(|v| v.id.as_deref().unwrap()).collect();
    assert_eq!(ids, ["loud", "transparent_small", "with_icon", "error"]);
    assert_eq!(views[3].widget.kind(), "AndesMessage");
}

#[test]
fn test_button_attributes_applied() {
    let views = inflate();

    let Widget::Button(small) = &views[1].widget else {
        panic!("expected a button");
    };
    assert_eq!(small.size(), ButtonSize::Small);
    assert_eq!(small.hierarchy(), ButtonHierarchy::Transparent);
    assert!(!small.is_enabled());
    assert_eq!(small.container().min_height, Some(24.0));

    let Widget::Button(with_icon) = &views[2].widget else {
        panic!("expected a button");
    };
    assert!(with_icon.left_icon_view().visibility.is_visible());
    assert_eq!(with_icon.config().left_icon().and_then(|i| i.source()), Some("andesui_icon"));
}

#[test]
fn test_message_attributes_applied() {
    let theme = AndesTheme::andes();
    let views = inflate();
    let message = views[3].widget.as_message().unwrap();

    assert_eq!(message.hierarchy(), MessageHierarchy::Quiet);
    assert_eq!(message.message_type(), MessageType::Error);
    assert_eq!(message.title(), Some("Something failed"));
    assert_eq!(message.body(), "@string/error_body");
    assert!(message.is_dismissable());
    assert_eq!(
        message.pipe().background_color(),
        Some(theme.color(ColorToken::MessageErrorPrimary))
    );
}

#[test]
fn test_snapshot_serializes() {
    for view in inflate() {
        let json = serde_json::to_value(view.widget.snapshot()).unwrap();
        assert_eq!(json["view"], "container");
        assert!(json["children"].is_array());
    }
}

#[test]
fn test_themed_inflation() {
    let theme = AndesTheme::from_toml_str(
        r##"
        [colors]
        button_loud_bg = "#FF0000"

        [dimensions.button.large]
        text_size = 18.0
        height = 56.0
        text_margin = 8.0
        lateral_padding = 20.0
        corner_radius = 8.0
        "##,
    )
    .unwrap();
    let views = markup::inflate(LAYOUT, Arc::new(theme)).unwrap();
    let loud = views[0].widget.as_button().unwrap();

    assert_eq!(loud.config().height, 56.0);
    assert_eq!(
        loud.container().background_color(),
        Some(andes_core::Color::from_hex(0xFF0000))
    );
}
