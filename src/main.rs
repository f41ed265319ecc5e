// IntSar-TRS: prints node matrices and accessor layouts

use glam::Vec3;
use intsar_trs::{component_count_of, AccessorType, Transform};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let nodes = [
        ("root", Transform::identity()),
        (
            "moved",
            Transform::new(Vec3::new(1.0, 2.0, 3.0), glam::Quat::IDENTITY, Vec3::ONE),
        ),
        (
            "turned",
            Transform::from_euler_degrees(Vec3::ZERO, [0.0, 90.0, 0.0], Vec3::splat(2.0)),
        ),
    ];

    for (name, transform) in &nodes {
        log::info!("{}: {:?}", name, transform);
        println!("{name}: {:?}", transform.matrix().to_cols_array_2d());
    }

    for tag in ["SCALAR", "VEC2", "VEC3", "VEC4"] {
        match component_count_of(tag) {
            Some(count) => println!("{tag}: {count} components"),
            None => log::warn!("{tag}: unknown accessor type"),
        }
    }

    let position: AccessorType = "VEC3".parse()?;
    println!("position accessor: {} x f32", position.component_count());

    Ok(())
}
