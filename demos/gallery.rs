//! Render a few gems to SVG.
//!
//! Run with: cargo run --example gallery

use gemcut::curves::{resample_by_chord_length, CubicBezier2};
use gemcut::shading::{halton_reflections, ShadedFace, DEFAULT_REFLECTION_COUNT};
use gemcut::{CapStyle, Extent, Gem, LightingSpec, Point2, ShapeSpec};
use std::fs;

const SCENE: f64 = 600.0;

/// Simple SVG builder
struct Svg {
    defs: String,
    content: String,
    next_id: usize,
}

impl Svg {
    fn new() -> Self {
        Self {
            defs: String::new(),
            content: String::new(),
            next_id: 0,
        }
    }

    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}{}", prefix, self.next_id)
    }

    fn rect(&mut self, w: f64, h: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<rect width="{:.2}" height="{:.2}" fill="{}"/>"#,
            w, h, fill
        ));
    }

    fn points_attr(points: &[Point2<f64>], offset: f64) -> String {
        points
            .iter()
            .map(|p| format!("{:.2},{:.2}", offset + p.x, offset + p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn polygon(&mut self, points: &[Point2<f64>], fill: &str, extra: &str) {
        if points.is_empty() {
            return;
        }
        self.content.push_str(&format!(
            r#"<polygon points="{}" fill="{}" {}/>"#,
            Self::points_attr(points, SCENE / 2.0),
            fill,
            extra
        ));
    }

    fn polyline(&mut self, points: &[Point2<f64>], stroke: &str) {
        self.content.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            Self::points_attr(points, SCENE / 2.0),
            stroke
        ));
    }

    fn circle(&mut self, p: Point2<f64>, r: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            SCENE / 2.0 + p.x,
            SCENE / 2.0 + p.y,
            r,
            fill
        ));
    }

    fn shadow_filter(&mut self, dx: f64, dy: f64, blur: f64, color: &str, opacity: f64) -> String {
        let id = self.id("shadow");
        self.defs.push_str(&format!(
            r#"<filter id="{}" x="-50%" y="-50%" width="200%" height="200%">"#,
            id
        ));
        self.defs.push_str(&format!(
            r#"<feDropShadow dx="{:.2}" dy="{:.2}" stdDeviation="{:.2}" flood-color="{}" flood-opacity="{:.3}"/></filter>"#,
            dx, dy, blur, color, opacity
        ));
        id
    }

    fn face_gradient(&mut self, face: &ShadedFace, hue: f64) -> String {
        let id = self.id("grad");
        let stops: String = face
            .stops
            .iter()
            .map(|s| {
                format!(
                    r#"<stop offset="{:.3}" stop-color="hsl({}, 80%, {:.2}%)"/>"#,
                    s.offset, hue, s.luminosity
                )
            })
            .collect();
        self.defs.push_str(&format!(
            r#"<linearGradient id="{}" gradientTransform="rotate({:.3} 0.5 0.5)">{}</linearGradient>"#,
            id,
            face.gradient_angle.to_degrees(),
            stops
        ));
        id
    }

    fn to_string(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}"><defs>{}</defs>{}</svg>"#,
            self.defs,
            self.content,
            s = SCENE
        )
    }
}

fn render_gem(shape: &ShapeSpec, lighting: &LightingSpec, hue: f64) -> String {
    let gem = Gem::build(shape, lighting, Extent::from_canvas(SCENE, SCENE));
    let mut svg = Svg::new();
    svg.rect(SCENE, SCENE, &format!("hsl({}, 40%, 90%)", (hue + 20.0) % 361.0));

    for layer in &gem.shadows {
        let filter = svg.shadow_filter(
            layer.offset.x,
            layer.offset.y,
            layer.blur,
            &format!("hsl({}, 30%, 40%)", hue),
            layer.opacity,
        );
        svg.polygon(gem.outline(), "white", &format!(r#"filter="url(#{})""#, filter));
    }

    for face in &gem.faces {
        let gradient = svg.face_gradient(face, hue);
        svg.polygon(&face.face.vertices, &format!("url(#{})", gradient), "");
    }

    svg.to_string()
}

fn render_subdivided(shape: &ShapeSpec, lighting: &LightingSpec, hue: f64) -> String {
    let gem = Gem::build(shape, lighting, Extent::from_canvas(SCENE, SCENE));
    let mut svg = Svg::new();
    svg.rect(SCENE, SCENE, "#f4f1ea");

    for part in gem.subdivided(2) {
        let fill = format!("hsl({}, 70%, {:.2}%)", hue, part.light);
        svg.polygon(&part.triangle.vertices(), &fill, &format!(r#"stroke="{}""#, fill));
    }

    svg.to_string()
}

fn render_bezier_outline() -> String {
    let mut svg = Svg::new();
    svg.rect(SCENE, SCENE, "#f4f1ea");

    // A closed blob made of four cubic segments.
    let k = 0.55 * 200.0;
    let corners = [
        Point2::new(200.0, 0.0),
        Point2::new(0.0, 160.0),
        Point2::new(-200.0, 0.0),
        Point2::new(0.0, -160.0),
    ];
    let tangents = [
        Point2::new(0.0, k),
        Point2::new(-k, 0.0),
        Point2::new(0.0, -k),
        Point2::new(k, 0.0),
    ];

    let mut dense = Vec::new();
    for i in 0..4 {
        let (a, b) = (corners[i], corners[(i + 1) % 4]);
        let (ta, tb) = (tangents[i], tangents[(i + 1) % 4]);
        let curve = CubicBezier2::new(
            a,
            Point2::new(a.x + ta.x, a.y + ta.y),
            Point2::new(b.x - tb.x, b.y - tb.y),
            b,
        );
        let samples = curve.sample_dense(200);
        // Consecutive segments share an endpoint.
        let skip = if dense.is_empty() { 0 } else { 1 };
        dense.extend(samples.into_iter().skip(skip));
    }

    svg.polyline(&dense, "#888");
    for p in resample_by_chord_length(&dense, 24) {
        svg.circle(p, 5.0, "#c0392b");
    }

    svg.to_string()
}

fn main() {
    fs::create_dir_all("screenshots").expect("Failed to create screenshots directory");

    let reflections = halton_reflections(DEFAULT_REFLECTION_COUNT, 3);

    let classic = ShapeSpec {
        sides: 8,
        width_factor: 0.9,
        height_factor: 0.8,
        level_count: 4,
        outside_spread: 0.3,
        center_spread: 0.7,
        ..ShapeSpec::default()
    };
    let pointy = ShapeSpec {
        sides: 5,
        width_factor: 0.7,
        height_factor: 1.0,
        level_count: 3,
        use_alternate_angle: true,
        cap: CapStyle::Pointy,
        ..ShapeSpec::default()
    };
    let lighting = LightingSpec::from_clock_position(3.0, 45.0, 30.0).with_reflections(reflections);

    let images = [
        ("gem_classic", render_gem(&classic, &lighting, 200.0)),
        ("gem_pointy", render_gem(&pointy, &lighting, 340.0)),
        ("gem_subdivided", render_subdivided(&classic, &lighting, 30.0)),
        ("bezier_outline", render_bezier_outline()),
    ];

    for (name, svg) in images {
        let path = format!("screenshots/{}.svg", name);
        fs::write(&path, svg).unwrap_or_else(|e| panic!("Failed to write {}: {}", path, e));
        println!("Generated {}", path);
    }

    println!("\nAll gallery images generated successfully!");
}
