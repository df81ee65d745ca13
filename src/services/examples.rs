//! Embedded example payloads for seeding probe requests.
//!
//! A container creation payload, two annotations of different weight, an
//! SVG-selector annotation that exercises the target visualizer, and one
//! plain JSON document that is not an annotation at all (the engine must
//! render it just as happily).

/// A named example payload.
#[derive(Debug, Clone, Copy)]
pub struct ExamplePayload {
    pub name: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// All embedded examples, in menu order.
pub const EXAMPLES: &[ExamplePayload] = &[
    ExamplePayload { name: "container", title: "Annotation container", text: CONTAINER },
    ExamplePayload { name: "serialized", title: "Fully serialized annotation", text: SERIALIZED },
    ExamplePayload { name: "simplified", title: "Minimal annotation", text: SIMPLIFIED },
    ExamplePayload { name: "svg", title: "Annotation with SVG selector", text: SVG },
    ExamplePayload { name: "person", title: "Plain JSON (not an annotation)", text: PERSON },
];

/// Look up an example by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static ExamplePayload> {
    EXAMPLES.iter().find(|e| e.name == name)
}

const CONTAINER: &str = r#"{
  "@context": ["http://www.w3.org/ns/anno.jsonld", "http://www.w3.org/ns/ldp.jsonld"],
  "@type": ["ldp:BasicContainer", "AnnotationCollection"],
  "label": "A container for my annotations"
}"#;

const SERIALIZED: &str = r#"{
  "@context": "http://www.w3.org/ns/anno.jsonld",
  "type": "Annotation",
  "created": "2018-11-26T09:00:00Z",
  "creator": {
    "id": "http://example.org/user1",
    "type": "Person",
    "name": "A. Annotator",
    "email": "annotator@example.org"
  },
  "motivation": "commenting",
  "body": [
    {
      "type": "TextualBody",
      "purpose": "tagging",
      "value": "rooftop"
    },
    {
      "type": "TextualBody",
      "purpose": "commenting",
      "value": "See also http://example.org/photos/index.html for the full set."
    }
  ],
  "target": {
    "source": "http://example.org/photo1.jpg",
    "selector": {
      "type": "FragmentSelector",
      "conformsTo": "http://www.w3.org/TR/media-frags/",
      "value": "xywh=50,50,640,480"
    }
  }
}"#;

const SIMPLIFIED: &str = r#"{
  "@context": "http://www.w3.org/ns/anno.jsonld",
  "type": "Annotation",
  "body": "http://example.org/post1",
  "target": {
    "source": "http://example.org/photo1.jpg"
  }
}"#;

const SVG: &str = r#"{
  "@context": "http://www.w3.org/ns/anno.jsonld",
  "type": "Annotation",
  "motivation": "highlighting",
  "body": [
    {
      "type": "TextualBody",
      "purpose": "describing",
      "value": "The marked region"
    },
    {
      "type": "Dataset",
      "key": "imageWidth",
      "value": 3000
    },
    {
      "type": "Dataset",
      "key": "imageHeight",
      "value": 2000
    }
  ],
  "target": {
    "source": "http://example.org/images/large-photo.jpg",
    "selector": {
      "type": "SvgSelector",
      "value": "<svg xmlns=\"http://www.w3.org/2000/svg\"><rect x=\"750\" y=\"500\" width=\"1500\" height=\"1000\"/><circle cx=\"1500\" cy=\"1000\" r=\"300\"/></svg>"
    }
  }
}"#;

const PERSON: &str = r#"{
  "@context": "http://schema.org",
  "@type": "Person",
  "name": "Maxima Musterfrau",
  "jobTitle": "Research Assistant",
  "telephone": "(04) 1234 5678",
  "url": "http://www.example.com",
  "sameAs": ["https://www.example.com/profiles/maxima"]
}"#;

#[cfg(test)]
#[path = "examples_test.rs"]
mod tests;
