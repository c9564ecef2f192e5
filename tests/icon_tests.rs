use maplet_icon::prelude::*;
use serde_json::json;

/// Integration tests for icon resolution through the public API
/// These tests build icons the way map code does, mostly from JSON options
#[cfg(test)]
mod icon_tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn icon(config: serde_json::Value) -> Icon {
        init_logging();
        Icon::from_json(config).expect("valid icon configuration")
    }

    #[test]
    fn test_class_name_is_appended() {
        let icon = icon(json!({
            "iconUrl": "a.png",
            "markerUrl": "pin.png",
            "className": "harbour"
        }));

        let element = icon.create_icon(None).unwrap().into_element();
        assert_eq!(element.class_name, "maplet-marker-icon harbour");
        assert!(element.class_name.contains("harbour"));
    }

    #[test]
    fn test_no_shadow_without_shadow_urls() {
        let icon = icon(json!({
            "iconUrl": "a.png",
            "markerUrl": "pin.png",
            "shadowSize": [41, 41]
        }));

        assert!(icon.create_shadow(None).is_none());
        assert!(icon.create_shadow(Some(Element::image("old.png"))).is_none());
    }

    #[test]
    fn test_retina_precedence() {
        let both = json!({ "iconUrl": "a.png", "iconRetinaUrl": "a@2x.png" });
        let base_only = json!({ "iconUrl": "a.png" });

        let retina = Icon::from_json(both.clone()).unwrap().with_display(PixelRatio(2.0));
        let standard = Icon::from_json(both).unwrap().with_display(PixelRatio(1.0));
        assert_eq!(retina.resolve_url(IconRole::Icon), Some("a@2x.png"));
        assert_eq!(standard.resolve_url(IconRole::Icon), Some("a.png"));

        for display in [PixelRatio(2.0), PixelRatio(1.0)] {
            let icon = Icon::from_json(base_only.clone()).unwrap().with_display(display);
            assert_eq!(icon.resolve_url(IconRole::Icon), Some("a.png"));
        }
    }

    #[test]
    fn test_retina_shadow_only() {
        let config = json!({
            "iconUrl": "a.png",
            "markerUrl": "pin.png",
            "shadowRetinaUrl": "s@2x.png"
        });

        let standard = icon(config.clone());
        assert!(standard.create_shadow(None).is_none());

        let retina = icon(config).with_display(HighDensityDisplay);
        let shadow = retina.create_shadow(None).unwrap().into_element();
        assert_eq!(shadow.src.as_deref(), Some("s@2x.png"));
    }

    #[test]
    fn test_anchor_defaults_to_half_size() {
        let icon = icon(json!({
            "iconUrl": "a.png",
            "markerUrl": "pin.png",
            "iconSize": [38, 95]
        }));

        let style = icon.create_icon(None).unwrap().element.style;
        assert_eq!((style.margin_left, style.margin_top), (Some(-19.0), Some(-47.5)));
    }

    #[test]
    fn test_explicit_anchor_overrides_size() {
        let icon = icon(json!({
            "iconUrl": "a.png",
            "markerUrl": "pin.png",
            "iconSize": [38, 95],
            "iconAnchor": [22, 94]
        }));

        let style = icon.create_icon(None).unwrap().element.style;
        assert_eq!((style.margin_left, style.margin_top), (Some(-22.0), Some(-94.0)));
        assert_eq!((style.width, style.height), (Some(38.0), Some(95.0)));
    }

    #[test]
    fn test_shadow_uses_icon_anchor() {
        let icon = icon(json!({
            "iconUrl": "a.png",
            "markerUrl": "pin.png",
            "shadowUrl": "s.png",
            "iconAnchor": [22, 94],
            "shadowSize": [50, 64]
        }));

        let shadow = icon.create_shadow(None).unwrap().into_element();
        assert_eq!(shadow.class_name, "maplet-marker-shadow ");
        assert_eq!(shadow.style.margin_left, Some(-22.0));
        assert_eq!(shadow.style.margin_top, Some(-94.0));
        assert_eq!(shadow.style.width, Some(50.0));
    }

    #[test]
    fn test_shadow_anchor_wins_over_icon_anchor() {
        let icon = icon(json!({
            "shadowUrl": "s.png",
            "iconAnchor": [22, 94],
            "shadowAnchor": [4, 62]
        }));

        let shadow = icon.create_shadow(None).unwrap().into_element();
        assert_eq!(shadow.style.margin_left, Some(-4.0));
        assert_eq!(shadow.style.margin_top, Some(-62.0));
        assert_eq!(shadow.style.width, None);
    }

    #[test]
    fn test_recreating_icon_is_idempotent() {
        let icon = icon(json!({
            "iconUrl": "a.png",
            "markerUrl": "pin.png",
            "iconSize": [38, 95],
            "markerSize": [38, 95],
            "iconOffset": [0, -8],
            "className": "harbour",
            "crossOrigin": true
        }));

        let first = icon.create_icon(None).unwrap().into_element();
        let update = icon.create_icon(Some(first.clone())).unwrap();

        assert!(update.reused);
        assert!(update.discarded.is_none());
        assert_eq!(update.element.class_name, first.class_name);
        assert_eq!(update.element.style, first.style);
        assert_eq!(update.element, first);
    }

    #[test]
    fn test_missing_icon_url_is_configuration_error() {
        let icon = icon(json!({ "markerUrl": "pin.png", "iconSize": [25, 41] }));
        let err = icon.create_icon(None).unwrap_err();

        assert!(matches!(err, IconError::Configuration(_)));
        assert_eq!(err.to_string(), "Configuration error: iconUrl or markerUrl not set");
    }

    #[test]
    fn test_missing_marker_url_is_configuration_error() {
        let icon = icon(json!({ "iconUrl": "a.png", "iconRetinaUrl": "a@2x.png" }));
        assert!(matches!(
            icon.create_icon(None),
            Err(IconError::Configuration(_))
        ));
    }

    #[test]
    fn test_cross_origin_true_is_anonymous() {
        let icon = icon(json!({
            "iconUrl": "a.png",
            "markerUrl": "pin.png",
            "shadowUrl": "s.png",
            "crossOrigin": true
        }));

        let element = icon.create_icon(None).unwrap().into_element();
        for layer in element.children() {
            assert_eq!(layer.cross_origin.as_deref(), Some(""));
        }

        let shadow = icon.create_shadow(None).unwrap().into_element();
        assert_eq!(shadow.cross_origin.as_deref(), Some(""));
        assert!(shadow.to_html().contains("crossorigin=\"\""));
    }

    #[test]
    fn test_cross_origin_string_and_false() {
        let credentials = icon(json!({
            "shadowUrl": "s.png",
            "crossOrigin": "use-credentials"
        }));
        let shadow = credentials.create_shadow(None).unwrap().into_element();
        assert_eq!(shadow.cross_origin.as_deref(), Some("use-credentials"));

        let none = icon(json!({ "shadowUrl": "s.png" }));
        let shadow = none.create_shadow(None).unwrap().into_element();
        assert_eq!(shadow.cross_origin, None);
    }

    #[test]
    fn test_plain_image_is_not_reused_for_composite() {
        let icon = icon(json!({ "iconUrl": "a.png", "markerUrl": "pin.png" }));
        let previous = Element::image("old.png");

        let update = icon.create_icon(Some(previous.clone())).unwrap();
        assert!(!update.reused);
        assert_eq!(update.element.tag(), Tag::Div);
        assert_eq!(update.element.children().len(), 2);
        assert_eq!(update.discarded, Some(previous));
    }

    // The shadow path only checks for a plain image; a composite is never
    // mutated and is handed back instead.
    #[test]
    fn test_composite_is_not_reused_for_shadow() {
        let icon = icon(json!({
            "iconUrl": "a.png",
            "markerUrl": "pin.png",
            "shadowUrl": "s.png"
        }));
        let composite = icon.create_icon(None).unwrap().into_element();

        let update = icon.create_shadow(Some(composite.clone())).unwrap();
        assert!(!update.reused);
        assert!(update.element.is_image());
        assert_eq!(update.discarded, Some(composite));
    }

    #[test]
    fn test_shadow_reuses_plain_image() {
        let icon = icon(json!({ "shadowUrl": "s.png", "shadowSize": [41, 41] }));
        let mut previous = Element::image("old-shadow.png");
        previous.title = Some("stale".to_string());

        let update = icon.create_shadow(Some(previous)).unwrap();
        assert!(update.reused);
        assert_eq!(update.element.src.as_deref(), Some("s.png"));
        assert_eq!(update.element.title, None);
        assert_eq!(update.element.style.margin_left, Some(-20.5));
    }

    #[test]
    fn test_default_marker_renders_stock_pin() {
        init_logging();
        let icon = Icon::default_marker("glyph.png").with_display(HighDensityDisplay);
        let element = icon.create_icon(None).unwrap().into_element();

        assert_eq!(element.children()[0].src.as_deref(), Some("marker-icon-2x.png"));
        assert_eq!(element.children()[1].src.as_deref(), Some("glyph.png"));
        assert_eq!(element.style.margin_left, Some(-12.0));
        assert_eq!(element.style.margin_top, Some(-41.0));
        assert_eq!(icon.popup_anchor(), Point::new(1.0, -34.0));
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = Icon::from_json(json!({ "iconSize": "big" })).unwrap_err();
        assert!(matches!(err, IconError::Serialization(_)));
    }
}
