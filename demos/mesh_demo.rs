//! Demonstration of sphere and hemisphere generation

use octsphere::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Generating sphere...");

    let config = SphereConfigBuilder::new()
        .radius(10.0)?
        .fragments(48.0)?
        .build()?;

    let sphere = OctSphere::generate(config)?;
    println!(
        "Levels: {} ({}-sided equator)",
        sphere.levels(),
        sphere.equator_sides()
    );

    let mesh = sphere.mesh();
    println!("\nMesh statistics:");
    println!("  Vertices: {}", mesh.vertex_count());
    println!("  Faces: {}", mesh.face_count());

    let data = mesh.to_mesh_data();
    let mem_positions = data.positions.len() * 12; // 3 floats * 4 bytes
    let mem_indices = data.indices.len() * 4;
    println!("\nMemory usage:");
    println!("  Positions: {} bytes", mem_positions);
    println!("  Indices: {} bytes", mem_indices);

    // Hemisphere with a flat equatorial cap
    let dome = octsphere(None, Some(20.0), true, 48.0);
    let cap = dome.cap.as_deref().unwrap_or_default();
    println!("\nHemisphere: {} triangles + {}-gon cap", dome.triangle_count(), cap.len());

    println!("\n=== Default angular resolution by radius ===");
    for radius in [1.0, 5.0, 20.0, 100.0] {
        let config = SphereConfigBuilder::new().radius(radius)?.build()?;
        println!(
            "r = {:>5}: {:>2} fragments -> {} levels",
            radius,
            config.fragments(),
            config.levels()
        );
    }

    Ok(())
}
