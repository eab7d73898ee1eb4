#![allow(clippy::missing_safety_doc)] // See `include/mshio.h`.

use msh_io::DecodeOptions;
use msh_io::Mesh;
use msh_io::NodeIndexing;
use std::ffi::c_char;
use std::ffi::c_int;
use std::ffi::CStr;
use std::fs;
use std::io;
use std::os::unix::io::FromRawFd as _;
use std::ptr;

const INDEXING_LOOKUP: c_int = 0;
const INDEXING_OFFSET: c_int = 1;

unsafe fn read(fd: c_int, options: &DecodeOptions) -> *mut Mesh {
    let f = fs::File::from_raw_fd(fd);
    let r = io::BufReader::new(f);
    let m = match msh_io::decode_with(r, options) {
        Ok(m) => m,
        Err(_) => return ptr::null_mut(),
    };
    Box::into_raw(Box::new(m))
}

#[no_mangle]
pub unsafe extern "C" fn msh_mesh_read(fd: c_int) -> *mut Mesh {
    read(fd, &DecodeOptions::default())
}

#[no_mangle]
pub unsafe extern "C" fn msh_mesh_read_with(fd: c_int, indexing: c_int, strict: c_int) -> *mut Mesh {
    let node_indexing = match indexing {
        INDEXING_LOOKUP => NodeIndexing::Lookup,
        INDEXING_OFFSET => NodeIndexing::Offset,
        _ => {
            drop(fs::File::from_raw_fd(fd));
            return ptr::null_mut();
        }
    };
    let options = DecodeOptions {
        node_indexing,
        strict_tag_ranges: strict != 0,
    };
    read(fd, &options)
}

#[no_mangle]
pub unsafe extern "C" fn msh_mesh_free(mesh: *mut Mesh) {
    if !mesh.is_null() {
        drop(Box::from_raw(mesh));
    }
}

#[no_mangle]
pub unsafe extern "C" fn msh_mesh_node_count(mesh: *const Mesh) -> u64 {
    assert!(!mesh.is_null());
    (*mesh).node_count() as u64
}

#[no_mangle]
pub unsafe extern "C" fn msh_mesh_coordinates(mesh: *const Mesh, node_idx: usize) -> *const f64 {
    assert!(!mesh.is_null());
    match (*mesh).points().get(node_idx) {
        Some(point) => point.as_ptr(),
        None => ptr::null(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn msh_mesh_element_count(mesh: *const Mesh) -> u64 {
    assert!(!mesh.is_null());
    (*mesh).element_count() as u64
}

#[repr(C)]
pub struct MshElement {
    /// Gmsh element type code.
    code: c_int,
    dimension: c_int,
    node_count: c_int,
    tag: u64,
    nodes: *const usize,
}

/// Returns 0 and fills `element` on success, -1 when `element_idx` is out of
/// bounds.
#[no_mangle]
pub unsafe extern "C" fn msh_mesh_element(
    element: *mut MshElement,
    mesh: *const Mesh,
    element_idx: usize,
) -> c_int {
    assert!(!mesh.is_null());
    assert!(!element.is_null());
    let cell = match (*mesh).cell(element_idx) {
        Some(v) => v,
        None => return -1,
    };
    *element = MshElement {
        code: cell.element_type.code() as c_int,
        dimension: cell.element_type.dimension() as c_int,
        node_count: cell.nodes.len() as c_int,
        tag: cell.tag as u64,
        nodes: cell.nodes.as_ptr(),
    };
    0
}

#[no_mangle]
pub unsafe extern "C" fn msh_mesh_warning_count(mesh: *const Mesh) -> u64 {
    assert!(!mesh.is_null());
    (*mesh).warnings().len() as u64
}

/// Returns 1 if the file at `path` has a header the decoder accepts, 0
/// otherwise.
#[no_mangle]
pub unsafe extern "C" fn msh_can_read(path: *const c_char) -> c_int {
    if path.is_null() {
        return 0;
    }
    let path = match CStr::from_ptr(path).to_str() {
        Ok(v) => v,
        Err(_) => return 0,
    };
    msh_io::can_decode(path) as c_int
}
