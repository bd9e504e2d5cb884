//! Dataset, joint, and rendering constants shared across the pipeline.
//!
//! Everything in this module is fixed at compile time. Index tables follow
//! the 49-joint convention used by the regressor: 25 OpenPose joints first,
//! then the 24-joint ground-truth superset.

/// Application name used for directories and user-facing messages.
pub const APP_NAME: &str = "poselab";

/// Per-channel mean for input image normalization (ImageNet statistics).
pub const IMG_NORM_MEAN: [f32; 3] = [0.485, 0.456, 0.406];

/// Per-channel standard deviation for input image normalization.
pub const IMG_NORM_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Default focal length of the weak-perspective camera, in pixels.
pub const FOCAL_LENGTH: f32 = 5000.0;

/// Network input resolution in pixels (square crops).
pub const IMG_RES: u32 = 224;

/// Dataset roots, annotation archives, and model asset paths.
pub mod datasets {
    use std::env;
    use std::path::PathBuf;

    /// Environment variable pointing at the directory holding dataset roots.
    pub const DATA_HOME_ENV: &str = "POSELAB_DATA_HOME";

    /// Environment variable pointing at the directory holding model assets.
    pub const CONFIG_HOME_ENV: &str = "POSELAB_CONFIG_HOME";

    /// Dataset key to root directory name under the data home.
    ///
    /// Several keys share one root: evaluation protocols (`h36m-p1`,
    /// `h36m-p2`) and filtered variants (`coco3d`, `cocoall3d`) read the
    /// same images as their base dataset.
    pub const DATASET_DIRS: &[(&str, &str)] = &[
        ("coco", "coco"),
        ("coco3d", "coco"),
        ("cocoall3d", "coco"),
        ("mpii", "mpii"),
        ("lsp", "lsp"),
        ("lsp-orig", "lsp_original"),
        ("lspet", "hr-lspet"),
        ("ochuman", "OCHuman"),
        ("ochuman-val", "OCHuman"),
        ("3doh", "3doh"),
        ("h36m", "h36m"),
        ("h36m-p1", "h36m"),
        ("h36m-p2", "h36m"),
        ("3dpw", "3dpw"),
        ("3dpw-val", "3dpw"),
        ("mpi-inf-3dhp", "mpi_inf_3dhp"),
        ("mpi-inf-3dhp_val", "mpi_inf_3dhp"),
    ];

    /// Preprocessed annotation archives per dataset.
    ///
    /// Index 0 holds the evaluation archives, index 1 the training archives.
    pub const DATASET_FILES: [&[(&str, &str)]; 2] = [
        &[
            ("h36m-p1", "h36m_valid_protocol1.npz"),
            ("h36m-p2", "h36m_valid_protocol2.npz"),
            ("mpi-inf-3dhp", "mpi_inf_3dhp_valid.npz"),
            ("3dpw", "3dpw_test_with_mmpose.npz"),
            ("ochuman", "ochuman_test_eft.npz"),
            ("lspet", "lspet_test_eft.npz"),
            ("3doh", "3doh_test.npz"),
        ],
        &[
            ("h36m", "h36m_train.npz"),
            ("coco", "coco_2014_train.npz"),
            ("coco3d", "coco_2014_train_eft_part.npz"),
            ("cocoall3d", "coco_2014_train_eft_all.npz"),
            ("mpii", "mpii_train.npz"),
            ("lsp-orig", "lsp_dataset_original_train.npz"),
            ("lspet", "hr-lspet_train.npz"),
            ("mpi-inf-3dhp", "mpi_inf_3dhp_train.npz"),
            ("3dpw", "3dpw_train.npz"),
        ],
    ];

    /// Which annotation split an archive belongs to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Split {
        /// Evaluation archives.
        Eval,
        /// Training archives.
        Train,
    }

    impl Split {
        /// Index of this split in [`DATASET_FILES`].
        pub const fn index(self) -> usize {
            match self {
                Self::Eval => 0,
                Self::Train => 1,
            }
        }
    }

    /// Root of the directory holding all dataset folders.
    ///
    /// Resolved from [`DATA_HOME_ENV`]; empty (relative) when unset.
    pub fn data_home() -> PathBuf {
        env::var_os(DATA_HOME_ENV).map_or_else(PathBuf::new, PathBuf::from)
    }

    /// Root of the directory holding model assets and annotation archives.
    ///
    /// Resolved from [`CONFIG_HOME_ENV`]; empty (relative) when unset.
    pub fn config_home() -> PathBuf {
        env::var_os(CONFIG_HOME_ENV).map_or_else(PathBuf::new, PathBuf::from)
    }

    /// Image root for a dataset key, or `None` for an unknown key.
    pub fn dataset_folder(name: &str) -> Option<PathBuf> {
        DATASET_DIRS
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, dir)| data_home().join(dir))
    }

    /// Annotation archive name for a dataset key in the given split.
    pub fn dataset_file(split: Split, name: &str) -> Option<&'static str> {
        DATASET_FILES[split.index()]
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, file)| *file)
    }

    /// Directory holding the preprocessed annotation archives.
    pub fn dataset_npz_path() -> PathBuf {
        config_home().join("dataset_extras")
    }

    /// Regressor producing the extra (non-SMPL) training joints.
    pub fn joint_regressor_extra() -> PathBuf {
        config_home().join("J_regressor_extra.npy")
    }

    /// Regressor producing the 17 H36M joints from the SMPL mesh.
    pub fn joint_regressor_h36m() -> PathBuf {
        config_home().join("J_regressor_h36m.npy")
    }

    /// Mean SMPL pose/shape/camera parameters used to initialize regression.
    pub fn smpl_mean_params() -> PathBuf {
        config_home().join("smpl_mean_params.npz")
    }

    /// Directory holding the SMPL body model files.
    pub fn smpl_model_dir() -> PathBuf {
        config_home().join("smpl")
    }

    /// Directory holding precomputed static fits.
    pub fn static_fits_dir() -> PathBuf {
        config_home().join("static_fits")
    }

    /// 3DPW sequence prefixes with heavy person-object occlusion.
    pub const PW3D_OCCLUDED_SEQUENCES: &[&str] = &[
        "courtyard_backpack",
        "courtyard_basketball",
        "courtyard_bodyScannerMotions",
        "courtyard_box",
        "courtyard_golf",
        "courtyard_jacket",
        "courtyard_laceShoe",
        "downtown_stairs",
        "flat_guitar",
        "flat_packBags",
        "outdoors_climbing",
        "outdoors_crosscountry",
        "outdoors_fencing",
        "outdoors_freestyle",
        "outdoors_golf",
        "outdoors_parcours",
        "outdoors_slalom",
    ];

    /// 3DPW test-split sequence names.
    pub const PW3D_TEST_SEQUENCES: &[&str] = &[
        "flat_packBags_00",
        "downtown_weeklyMarket_00",
        "outdoors_fencing_01",
        "downtown_walkBridge_01",
        "downtown_enterShop_00",
        "downtown_rampAndStairs_00",
        "downtown_bar_00",
        "downtown_runForBus_01",
        "downtown_cafe_00",
        "flat_guitar_01",
        "downtown_runForBus_00",
        "downtown_sitOnStairs_00",
        "downtown_bus_00",
        "downtown_arguing_00",
        "downtown_crossStreets_00",
        "downtown_walkUphill_00",
        "downtown_walking_00",
        "downtown_car_00",
        "downtown_warmWelcome_00",
        "downtown_upstairs_00",
        "downtown_stairs_00",
        "downtown_windowShopping_00",
        "office_phoneCall_00",
        "downtown_downstairs_00",
    ];
}

/// Joint orderings, selectors, and left-right flip permutations.
pub mod joints {
    use std::collections::HashMap;

    /// Number of OpenPose detector joints.
    pub const NUM_OP_JOINTS: usize = 25;

    /// Number of ground-truth superset joints.
    pub const NUM_GT_JOINTS: usize = 24;

    /// Number of joints in the combined ordering.
    pub const NUM_JOINTS: usize = NUM_OP_JOINTS + NUM_GT_JOINTS;

    /// The combined joint ordering: 25 OpenPose joints (detector order)
    /// followed by the 24-joint ground-truth superset. Datasets that lack a
    /// joint simply leave it unannotated.
    pub const JOINT_NAMES: [&str; NUM_JOINTS] = [
        "OP Nose",
        "OP Neck",
        "OP RShoulder",
        "OP RElbow",
        "OP RWrist",
        "OP LShoulder",
        "OP LElbow",
        "OP LWrist",
        "OP MidHip",
        "OP RHip",
        "OP RKnee",
        "OP RAnkle",
        "OP LHip",
        "OP LKnee",
        "OP LAnkle",
        "OP REye",
        "OP LEye",
        "OP REar",
        "OP LEar",
        "OP LBigToe",
        "OP LSmallToe",
        "OP LHeel",
        "OP RBigToe",
        "OP RSmallToe",
        "OP RHeel",
        "Right Ankle",
        "Right Knee",
        "Right Hip",
        "Left Hip",
        "Left Knee",
        "Left Ankle",
        "Right Wrist",
        "Right Elbow",
        "Right Shoulder",
        "Left Shoulder",
        "Left Elbow",
        "Left Wrist",
        "Neck (LSP)",
        "Top of Head (LSP)",
        "Pelvis (MPII)",
        "Thorax (MPII)",
        "Spine (H36M)",
        "Jaw (H36M)",
        "Head (H36M)",
        "Nose",
        "Left Eye",
        "Right Eye",
        "Left Ear",
        "Right Ear",
    ];

    /// Joint name to row index in the extended SMPL joint regressor output.
    pub const JOINT_MAP: [(&str, usize); NUM_JOINTS] = [
        ("OP Nose", 24),
        ("OP Neck", 12),
        ("OP RShoulder", 17),
        ("OP RElbow", 19),
        ("OP RWrist", 21),
        ("OP LShoulder", 16),
        ("OP LElbow", 18),
        ("OP LWrist", 20),
        ("OP MidHip", 0),
        ("OP RHip", 2),
        ("OP RKnee", 5),
        ("OP RAnkle", 8),
        ("OP LHip", 1),
        ("OP LKnee", 4),
        ("OP LAnkle", 7),
        ("OP REye", 25),
        ("OP LEye", 26),
        ("OP REar", 27),
        ("OP LEar", 28),
        ("OP LBigToe", 29),
        ("OP LSmallToe", 30),
        ("OP LHeel", 31),
        ("OP RBigToe", 32),
        ("OP RSmallToe", 33),
        ("OP RHeel", 34),
        ("Right Ankle", 8),
        ("Right Knee", 5),
        ("Right Hip", 45),
        ("Left Hip", 46),
        ("Left Knee", 4),
        ("Left Ankle", 7),
        ("Right Wrist", 21),
        ("Right Elbow", 19),
        ("Right Shoulder", 17),
        ("Left Shoulder", 16),
        ("Left Elbow", 18),
        ("Left Wrist", 20),
        ("Neck (LSP)", 47),
        ("Top of Head (LSP)", 48),
        ("Pelvis (MPII)", 49),
        ("Thorax (MPII)", 50),
        ("Spine (H36M)", 51),
        ("Jaw (H36M)", 52),
        ("Head (H36M)", 53),
        ("Nose", 24),
        ("Left Eye", 26),
        ("Right Eye", 25),
        ("Left Ear", 28),
        ("Right Ear", 27),
    ];

    /// Joint name to position in [`JOINT_NAMES`].
    pub fn joint_ids() -> HashMap<&'static str, usize> {
        JOINT_NAMES
            .iter()
            .enumerate()
            .map(|(idx, name)| (*name, idx))
            .collect()
    }

    /// Regressor row index for a joint name, or `None` for an unknown name.
    pub fn smpl_index(name: &str) -> Option<usize> {
        JOINT_MAP
            .iter()
            .find(|(joint, _)| *joint == name)
            .map(|(_, idx)| *idx)
    }

    /// Selects the 18 OpenPose-ordered joints from the 24 ground-truth joints.
    pub const J24_TO_J18: [usize; 18] = [
        19, 12, 8, 7, 6, 9, 10, 11, 2, 1, 0, 3, 4, 5, 21, 20, 23, 22,
    ];

    /// Selects the 18 OpenPose-ordered joints from the combined 49 joints
    /// (the ground-truth block offset by the 25 detector joints).
    pub fn j49_to_j18() -> [usize; 18] {
        J24_TO_J18.map(|idx| NUM_OP_JOINTS + idx)
    }

    /// Selects the 18-joint subset from the 25 OpenPose joints.
    pub const OP25_TO_OP18: [usize; 18] = [
        0, 1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
    ];

    /// Selects the 14 LSP joints plus head/neck extras from the 17 H36M joints.
    pub const H36M_TO_J17: [usize; 17] = [6, 5, 4, 1, 2, 3, 16, 15, 14, 11, 12, 13, 8, 10, 0, 7, 9];

    /// Selects the 14 LSP joints from the 17 H36M joints.
    pub fn h36m_to_j14() -> [usize; 14] {
        let mut out = [0; 14];
        out.copy_from_slice(&H36M_TO_J17[..14]);
        out
    }

    /// Selects the 14 LSP joints plus head/neck extras from the ground-truth joints.
    pub const J24_TO_J17: [usize; 17] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 18, 14, 16, 17];

    /// Selects the 14 LSP joints from the ground-truth joints.
    pub fn j24_to_j14() -> [usize; 14] {
        let mut out = [0; 14];
        out.copy_from_slice(&J24_TO_J17[..14]);
        out
    }

    /// Left-right mirror permutation of the 24 SMPL kinematic-tree joints.
    pub const SMPL_JOINTS_FLIP_PERM: [usize; 24] = [
        0, 2, 1, 3, 5, 4, 6, 8, 7, 9, 11, 10, 12, 14, 13, 15, 17, 16, 19, 18, 21, 20, 23, 22,
    ];

    /// Mirror permutation of the 72 axis-angle pose parameters
    /// (three consecutive entries per joint of [`SMPL_JOINTS_FLIP_PERM`]).
    pub fn smpl_pose_flip_perm() -> [usize; 72] {
        let mut out = [0; 72];
        for (joint, &target) in SMPL_JOINTS_FLIP_PERM.iter().enumerate() {
            out[3 * joint] = 3 * target;
            out[3 * joint + 1] = 3 * target + 1;
            out[3 * joint + 2] = 3 * target + 2;
        }
        out
    }

    /// Mirror permutation of the 24 ground-truth joints.
    pub const J24_FLIP_PERM: [usize; NUM_GT_JOINTS] = [
        5, 4, 3, 2, 1, 0, 11, 10, 9, 8, 7, 6, 12, 13, 14, 15, 16, 17, 18, 19, 21, 20, 23, 22,
    ];

    /// Mirror permutation of the 25 OpenPose joints.
    pub const OP25_FLIP_PERM: [usize; NUM_OP_JOINTS] = [
        0, 1, 5, 6, 7, 2, 3, 4, 8, 12, 13, 14, 9, 10, 11, 16, 15, 18, 17, 22, 23, 24, 19, 20, 21,
    ];

    /// Mirror permutation of the combined 49 joints.
    pub fn j49_flip_perm() -> [usize; NUM_JOINTS] {
        let mut out = [0; NUM_JOINTS];
        out[..NUM_OP_JOINTS].copy_from_slice(&OP25_FLIP_PERM);
        for (idx, &target) in J24_FLIP_PERM.iter().enumerate() {
            out[NUM_OP_JOINTS + idx] = NUM_OP_JOINTS + target;
        }
        out
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn is_involution(perm: &[usize]) -> bool {
            perm.iter().enumerate().all(|(idx, &target)| {
                target < perm.len() && perm[target] == idx
            })
        }

        #[test]
        fn test_joint_names_cardinality() {
            assert_eq!(JOINT_NAMES.len(), 49);
            assert_eq!(JOINT_MAP.len(), JOINT_NAMES.len());
        }

        #[test]
        fn test_joint_map_covers_joint_names() {
            for (name, _) in &JOINT_MAP {
                assert!(JOINT_NAMES.contains(name), "unmapped joint {name}");
            }
        }

        #[test]
        fn test_joint_ids_match_ordering() {
            let ids = joint_ids();
            assert_eq!(ids["OP Nose"], 0);
            assert_eq!(ids["Right Ankle"], 25);
            assert_eq!(ids["Right Ear"], 48);
        }

        #[test]
        fn test_smpl_index_lookup() {
            assert_eq!(smpl_index("OP Neck"), Some(12));
            assert_eq!(smpl_index("Top of Head (LSP)"), Some(48));
            assert_eq!(smpl_index("Tail"), None);
        }

        #[test]
        fn test_flip_perms_are_involutions() {
            assert!(is_involution(&SMPL_JOINTS_FLIP_PERM));
            assert!(is_involution(&smpl_pose_flip_perm()));
            assert!(is_involution(&J24_FLIP_PERM));
            assert!(is_involution(&OP25_FLIP_PERM));
            assert!(is_involution(&j49_flip_perm()));
        }

        #[test]
        fn test_flip_perm_swaps_sides() {
            let ids = joint_ids();
            let perm = j49_flip_perm();
            assert_eq!(perm[ids["OP LWrist"]], ids["OP RWrist"]);
            assert_eq!(perm[ids["Left Knee"]], ids["Right Knee"]);
            assert_eq!(perm[ids["OP Nose"]], ids["OP Nose"]);
        }

        #[test]
        fn test_selector_indices_in_range() {
            assert!(J24_TO_J18.iter().all(|&i| i < NUM_GT_JOINTS));
            assert!(j49_to_j18().iter().all(|&i| i < NUM_JOINTS));
            assert!(OP25_TO_OP18.iter().all(|&i| i < NUM_OP_JOINTS));
            assert!(H36M_TO_J17.iter().all(|&i| i < 17));
            assert!(J24_TO_J17.iter().all(|&i| i < NUM_GT_JOINTS));
        }

        #[test]
        fn test_truncated_selectors_are_prefixes() {
            assert_eq!(h36m_to_j14()[..], H36M_TO_J17[..14]);
            assert_eq!(j24_to_j14()[..], J24_TO_J17[..14]);
        }
    }
}

/// Part-segmentation color schemes used by the renderer and visualizer.
pub mod colors {
    /// RGB color per Graphonomy part label, in label order.
    pub const PART_COLORS: [(&str, [u8; 3]); 20] = [
        ("background", [0, 0, 0]),
        ("hat", [128, 0, 0]),
        ("hair", [255, 0, 0]),
        ("glove", [0, 85, 0]),
        ("sunglasses", [170, 0, 51]),
        ("upperclothes", [255, 85, 0]),
        ("dress", [0, 0, 85]),
        ("coat", [0, 119, 221]),
        ("socks", [85, 85, 0]),
        ("pants", [0, 85, 85]),
        ("jumpsuits", [85, 51, 0]),
        ("scarf", [52, 86, 128]),
        ("skirt", [0, 128, 0]),
        ("face", [0, 0, 255]),
        ("leftArm", [51, 170, 221]),
        ("rightArm", [0, 255, 255]),
        ("leftLeg", [85, 255, 170]),
        ("rightLeg", [170, 255, 85]),
        ("leftShoe", [255, 255, 0]),
        ("rightShoe", [255, 170, 0]),
    ];

    /// Recoloring of the full Graphonomy scheme onto the merged scheme,
    /// keyed by the original label. Applied to raw segmentation images
    /// before training on merged part labels.
    pub const PART_COLORS_REMAP: [(&str, [u8; 3]); 20] = [
        ("background", [0, 0, 0]),
        ("hat", [255, 0, 0]),
        ("hair", [255, 0, 0]),
        ("glove", [255, 85, 0]),
        ("sunglasses", [0, 0, 255]),
        ("upperclothes", [255, 85, 0]),
        ("dress", [255, 85, 0]),
        ("coat", [255, 85, 0]),
        ("socks", [0, 85, 85]),
        ("pants", [0, 85, 85]),
        ("jumpsuits", [255, 85, 0]),
        ("scarf", [255, 0, 0]),
        ("skirt", [0, 85, 85]),
        ("face", [0, 0, 255]),
        ("leftArm", [51, 170, 221]),
        ("rightArm", [0, 255, 255]),
        ("leftLeg", [85, 255, 170]),
        ("rightLeg", [170, 255, 85]),
        ("leftShoe", [255, 255, 0]),
        ("rightShoe", [255, 170, 0]),
    ];

    /// Merged scheme: clothing collapsed into upper/lower body, sides kept.
    pub const MERGED_PART_COLORS: [(&str, [u8; 3]); 11] = [
        ("background", [0, 0, 0]),
        ("hair", [255, 0, 0]),
        ("face", [0, 0, 255]),
        ("upperclothes", [255, 85, 0]),
        ("pants", [0, 85, 85]),
        ("leftArm", [51, 170, 221]),
        ("rightArm", [0, 255, 255]),
        ("leftLeg", [85, 255, 170]),
        ("rightLeg", [170, 255, 85]),
        ("leftShoe", [255, 255, 0]),
        ("rightShoe", [255, 170, 0]),
    ];

    /// Labels of the full Graphonomy scheme, in color-map order.
    pub fn part_labels() -> [&'static str; 20] {
        PART_COLORS.map(|(label, _)| label)
    }

    /// Labels of the merged scheme, in color-map order.
    pub fn merged_part_labels() -> [&'static str; 11] {
        MERGED_PART_COLORS.map(|(label, _)| label)
    }

    /// Color for a label in the full scheme, normalized to `[0, 1]`.
    pub fn part_color_norm(label: &str) -> Option<[f32; 3]> {
        lookup(&PART_COLORS, label).map(normalize)
    }

    /// Color for a label in the merged scheme, normalized to `[0, 1]`.
    pub fn merged_part_color_norm(label: &str) -> Option<[f32; 3]> {
        lookup(&MERGED_PART_COLORS, label).map(normalize)
    }

    fn lookup(map: &[(&str, [u8; 3])], label: &str) -> Option<[u8; 3]> {
        map.iter()
            .find(|(name, _)| *name == label)
            .map(|(_, rgb)| *rgb)
    }

    fn normalize(rgb: [u8; 3]) -> [f32; 3] {
        rgb.map(|channel| f32::from(channel) / 255.0)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_scheme_cardinalities() {
            assert_eq!(PART_COLORS.len(), 20);
            assert_eq!(PART_COLORS_REMAP.len(), PART_COLORS.len());
            assert_eq!(MERGED_PART_COLORS.len(), 11);
        }

        #[test]
        fn test_remap_targets_are_merged_colors() {
            for (label, color) in &PART_COLORS_REMAP {
                assert!(
                    MERGED_PART_COLORS.iter().any(|(_, rgb)| rgb == color),
                    "remap of '{label}' points outside the merged scheme"
                );
            }
        }

        #[test]
        fn test_merged_labels_subset_of_full_labels() {
            let full = part_labels();
            for label in merged_part_labels() {
                assert!(full.contains(&label));
            }
        }

        #[test]
        fn test_normalized_colors_in_unit_range() {
            let face = part_color_norm("face").unwrap_or([2.0; 3]);
            assert!(face.iter().all(|c| (0.0..=1.0).contains(c)));
            assert!((face[2] - 1.0).abs() < f32::EPSILON);
            assert_eq!(part_color_norm("cape"), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::datasets::{DATASET_DIRS, Split, dataset_file, dataset_folder};

    #[test]
    fn test_train_archive_lookup() {
        assert_eq!(dataset_file(Split::Train, "h36m"), Some("h36m_train.npz"));
        assert_eq!(dataset_file(Split::Train, "3dpw"), Some("3dpw_train.npz"));
        assert_eq!(dataset_file(Split::Train, "h36m-p2"), None);
    }

    #[test]
    fn test_eval_archive_lookup() {
        assert_eq!(
            dataset_file(Split::Eval, "h36m-p2"),
            Some("h36m_valid_protocol2.npz")
        );
        assert_eq!(dataset_file(Split::Eval, "coco"), None);
    }

    #[test]
    fn test_dataset_folder_sharing() {
        assert_eq!(dataset_folder("h36m"), dataset_folder("h36m-p1"));
        assert_eq!(dataset_folder("coco3d"), dataset_folder("coco"));
        assert_eq!(dataset_folder("unknown"), None);
    }

    #[test]
    fn test_every_archive_key_has_a_folder() {
        for split in [Split::Eval, Split::Train] {
            for (key, _) in super::datasets::DATASET_FILES[split.index()] {
                assert!(
                    DATASET_DIRS.iter().any(|(name, _)| name == key),
                    "archive key '{key}' has no dataset root"
                );
            }
        }
    }
}
