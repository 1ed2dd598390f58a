//! End-to-end pipeline scenarios.

use std::time::{Duration, Instant};

use figurine_compose::{Brush, Evaluator};
use figurine_estimate::estimate;
use figurine_pipeline::{
    run_pipeline, EngravingSpec, Keepsake, Pipeline, PipelineConfig, Poll,
};
use figurine_types::{cuboid, IndexedMesh, MeshBounds, Vector3};

/// A box figurine floating off-center, the way meshes arrive from the
/// generation service.
fn off_center_box() -> IndexedMesh {
    let mut mesh = cuboid(10.0, 12.0, 8.0);
    mesh.translate(Vector3::new(30.0, 4.0, -12.0));
    mesh
}

#[test]
fn box_figurine_without_engraving() {
    let keepsake = run_pipeline(
        &off_center_box(),
        &EngravingSpec::empty(),
        None,
        &PipelineConfig::default(),
    )
    .expect("pipeline");

    // The pedestal adds volume beyond the 10 x 12 x 8 box
    assert!(keepsake.estimate.volume > 960.0);
    assert_eq!(keepsake.stats.lines_attempted, 0);

    let bounds = keepsake.solid.bounds();
    // Figurine grounded on y = 0, pedestal extending below it
    assert!(bounds.min.y < 0.0);
    assert!((bounds.max.y - 12.0).abs() < 1e-6);
    // Footprint centered on the origin
    assert!(bounds.center().x.abs() < 1e-6);
    assert!(bounds.center().z.abs() < 1e-6);

    // Sellable numbers
    let shown = keepsake.estimate.rounded();
    assert!(shown.mass > 0.0);
    assert!(shown.price > 12.0);
}

#[test]
fn carving_reduces_volume_mass_and_price() {
    let plain = run_pipeline(
        &off_center_box(),
        &EngravingSpec::empty(),
        None,
        &PipelineConfig::default(),
    )
    .expect("pipeline");

    // A notch crossing the pedestal wall, standing in for an engraved line.
    // Pedestal radius is 6.2 here, wall near z = 6.2 at x = 0.
    let notch = Brush::new(cuboid(2.0, 0.5, 2.0)).translated(Vector3::new(0.0, -0.55, 6.2));

    let evaluator = Evaluator::new();
    let carved = evaluator
        .subtract(&plain.solid, &notch.bake())
        .expect("subtract");

    let carved_estimate =
        estimate(&carved, &PipelineConfig::default().estimate).expect("estimate");

    assert!(carved_estimate.volume < plain.estimate.volume);
    assert!(carved_estimate.mass < plain.estimate.mass);
    assert!(carved_estimate.price < plain.estimate.price);
}

#[test]
fn rapid_resubmission_supersedes_earlier_jobs() {
    let config = PipelineConfig::default().with_debounce(Duration::from_millis(50));
    let pipeline = Pipeline::spawn(config, None);

    let first = pipeline.submit(off_center_box(), EngravingSpec::empty());
    let second = pipeline.submit(cuboid(6.0, 6.0, 6.0), EngravingSpec::empty());

    let keepsake = wait_ready(&pipeline, second);
    assert!(matches!(pipeline.poll(first), Poll::Superseded));

    // The result belongs to the second figurine: 6 x 6 x 6 plus pedestal
    assert!(keepsake.estimate.volume > 216.0);
    assert!(keepsake.estimate.volume < 960.0);

    pipeline.shutdown();
}

#[test]
fn engraving_without_typeface_degrades_to_plain_pedestal() {
    let engraving = EngravingSpec::new("For Mom", "est. 2026").expect("spec");

    let engraved = run_pipeline(
        &off_center_box(),
        &engraving,
        None,
        &PipelineConfig::default(),
    )
    .expect("pipeline");
    let plain = run_pipeline(
        &off_center_box(),
        &EngravingSpec::empty(),
        None,
        &PipelineConfig::default(),
    )
    .expect("pipeline");

    // No typeface means no subtraction was even attempted
    assert_eq!(engraved.stats.lines_attempted, 0);
    assert!((engraved.estimate.volume - plain.estimate.volume).abs() < 1e-9);
}

fn wait_ready(pipeline: &Pipeline, generation: figurine_pipeline::Generation) -> Box<Keepsake> {
    let deadline = Instant::now() + Duration::from_secs(60);
    loop {
        match pipeline.poll(generation) {
            Poll::Ready(keepsake) => return keepsake,
            Poll::Failed(err) => panic!("pipeline failed: {err}"),
            Poll::Superseded => panic!("newest generation cannot be superseded"),
            Poll::Pending => {
                assert!(Instant::now() < deadline, "pipeline timed out");
                std::thread::sleep(Duration::from_millis(20));
            }
        }
    }
}
