//! Load a FreeFem++ `.msh` file and summarize its cells.
//!
//! Usage:
//! ```text
//! cargo run --example mesh_summary -- path/to/mesh.msh [--print]
//! ```

use fe_mesh2d::prelude::*;
use std::process::ExitCode;

fn summarize(path: &str, print_cells: bool) -> Result<(), MeshError> {
    let mut mesh = TriangleMesh::new();
    mesh.read_file_msh(path)?;

    let mut clockwise = 0usize;
    let mut degenerate = 0usize;
    for cell in 0..mesh.get_ncel() {
        let det = mesh.det_j_affine_transform(cell)?;
        if det == 0.0 {
            degenerate += 1;
        } else if det < 0.0 {
            clockwise += 1;
        }
    }

    println!("vertices:   {}", mesh.get_nver());
    println!("cells:      {}", mesh.get_ncel());
    println!("total area: {}", mesh.total_area()?);
    println!("clockwise:  {clockwise}");
    println!("degenerate: {degenerate}");
    if print_cells {
        mesh.print();
    }
    Ok(())
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: mesh_summary <mesh.msh> [--print]");
        return ExitCode::FAILURE;
    };
    let print_cells = args.any(|a| a == "--print");

    match summarize(&path, print_cells) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error reading mesh file: {e}");
            ExitCode::FAILURE
        }
    }
}
