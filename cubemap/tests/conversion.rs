use cubemap::{
    cmp_to_erp, erp_to_cmp, erp_to_cmp_with, CubeFace, CubeFaceSet, FaceExtraction, ImageBuffer, Interpolation,
};

const COLOURS: [[u8; 3]; 6] = [
    [220, 20, 20], [20, 220, 20], [20, 20, 220],
    [220, 220, 20], [20, 220, 220], [220, 20, 220],
];

fn solid_faces(size: usize) -> CubeFaceSet<3, u8> {
    CubeFaceSet::new(COLOURS.map(|colour| ImageBuffer::from_fn(size, size, |_, _| colour))).unwrap()
}

/* Each face gets its own base level plus gentle horizontal and vertical ramps */
fn gradient_faces(size: usize) -> CubeFaceSet<3, u8> {
    let faces = CubeFace::ALL.map(|face| {
        let base = 40 + 25 * face.index();
        ImageBuffer::from_fn(size, size, |x, y| [
            base as u8,
            (60 + 3 * x / 4) as u8,
            (60 + 3 * y / 4) as u8,
        ])
    });
    CubeFaceSet::new(faces).unwrap()
}

fn mean_abs_difference(a: &ImageBuffer<3, u8>, b: &ImageBuffer<3, u8>, margin: usize) -> f64 {
    let (mut total, mut count) = (0.0, 0usize);
    for y in margin..a.height - margin {
        for x in margin..a.width - margin {
            let (pa, pb) = (a.pixel(x, y), b.pixel(x, y));
            for c in 0..3 {
                total += (pa[c] as f64 - pb[c] as f64).abs();
                count += 1;
            }
        }
    }
    total / count as f64
}

#[test]
fn cube_map_survives_a_round_trip() {
    let size = 64;
    let original = gradient_faces(size);
    let pano = cmp_to_erp(&original).unwrap();
    assert_eq!(pano.dimensions(), (2 * size, size));

    let restored = erp_to_cmp(&pano, Some(size), Some(size)).unwrap();
    for (face, image) in restored.iter() {
        let difference = mean_abs_difference(&original[face], image, size / 8);
        assert!(difference < 10.0, "{face} face differs by {difference:.2} on average");
    }
}

#[test]
fn round_trip_works_with_every_interpolation() {
    let size = 48;
    let original = gradient_faces(size);
    let pano = cmp_to_erp(&original).unwrap();
    for interpolation in Interpolation::ALL {
        let options = FaceExtraction::new()
            .with_height(size)
            .with_width(size)
            .with_interpolation(interpolation);
        let restored = erp_to_cmp_with(&pano, &options).unwrap();
        for (face, image) in restored.iter() {
            let difference = mean_abs_difference(&original[face], image, size / 8);
            assert!(difference < 10.0, "{face} face with {interpolation} differs by {difference:.2}");
        }
    }
}

#[test]
fn face_centres_come_back_to_their_own_face() {
    let pano = cmp_to_erp(&solid_faces(32)).unwrap();
    let faces = erp_to_cmp(&pano, Some(33), Some(33)).unwrap();
    for (face, image) in faces.iter() {
        assert_eq!(image.pixel(16, 16), COLOURS[face.index()], "{face} centre");
    }
}

#[test]
fn flat_faces_fill_their_panorama_regions() {
    let pano = cmp_to_erp(&solid_faces(32)).unwrap();
    /* Centre of each face's angular region */
    let landmarks = [
        (32, 16, CubeFace::Front),
        (48, 16, CubeFace::Right),
        (0, 16, CubeFace::Back),
        (16, 16, CubeFace::Left),
        (40, 0, CubeFace::Top),
        (40, 31, CubeFace::Bottom),
    ];
    for (col, row, face) in landmarks {
        assert_eq!(pano.pixel(col, row), COLOURS[face.index()], "{face} at {col},{row}");
    }
    assert!(pano.data.chunks_exact(3).all(|p| COLOURS.iter().any(|c| c == p)));
}

#[test]
fn default_face_size_is_a_quarter_of_the_panorama() {
    let pano = ImageBuffer::<3, u8>::from_fn(1024, 512, |x, y| [(x % 256) as u8, (y % 256) as u8, 128]);
    let faces = erp_to_cmp(&pano, None, None).unwrap();
    assert_eq!(faces.face_dimensions(), (256, 256));
    for (_, face) in faces.iter() {
        assert_eq!(face.data.len(), 256 * 256 * 3);
    }
}

#[test]
fn conversions_are_deterministic() {
    let faces = gradient_faces(24);
    let first = cmp_to_erp(&faces).unwrap();
    let second = cmp_to_erp(&faces).unwrap();
    assert_eq!(first, second);

    let back_first = erp_to_cmp(&first, None, None).unwrap();
    let back_second = erp_to_cmp(&second, None, None).unwrap();
    assert_eq!(back_first, back_second);
}

#[test]
fn other_channel_layouts_convert() {
    let depth = CubeFaceSet::new(CubeFace::ALL.map(|face| {
        ImageBuffer::<1, u16>::from_fn(16, 16, |_, _| [1000 * (face.index() as u16 + 1)])
    })).unwrap();
    let pano = cmp_to_erp(&depth).unwrap();
    assert_eq!(pano.dimensions(), (32, 16));
    assert_eq!(pano.pixel(16, 8), [1000]);

    let faces = erp_to_cmp(&pano, Some(9), Some(9)).unwrap();
    assert_eq!(faces[CubeFace::Right].pixel(4, 4), [2000]);

    let hdr = ImageBuffer::<3, f32>::from_fn(64, 32, |_, _| [0.5, 2.0, 8.0]);
    let faces = erp_to_cmp(&hdr, None, None).unwrap();
    for (_, face) in faces.iter() {
        assert!(face.data.chunks_exact(3).all(|p| (p[0] - 0.5).abs() < 1e-6 && (p[2] - 8.0).abs() < 1e-5));
    }
}
