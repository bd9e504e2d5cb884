//! Hyperparameter schema definitions.
//!
//! Field names serialize as `SCREAMING_SNAKE_CASE` to match the key
//! convention of the pipeline's YAML experiment files. Every field carries a
//! default, so any subset of keys is a valid override file.

use crate::constants::{FOCAL_LENGTH, IMG_RES};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete hyperparameter tree for one experiment.
///
/// `Hparams::default()` is a pure factory: each call returns a fresh,
/// independent value. Merging never mutates a tree handed to a consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Hparams {
    /// Root directory for experiment logs.
    pub log_dir: PathBuf,

    /// Training method whose block of hyperparameters applies (`spin`, `dsr`).
    pub method: String,

    /// Human-readable experiment name.
    pub exp_name: String,

    /// Experiment identifier derived during run preparation.
    pub exp_id: Option<String>,

    /// Run the test loop instead of training.
    pub run_test: bool,

    /// Random seed; negative means unseeded.
    pub seed_value: i64,

    /// Enable the training-framework logger.
    pub pl_logging: bool,

    /// Progress refresh rate in batches.
    pub refresh_rate: u32,

    /// Run a single batch through train/val/test for debugging.
    pub fast_dev_run: bool,

    /// Enable autograd anomaly detection.
    pub detect_anomaly: bool,

    /// Dataset and augmentation settings.
    pub dataset: DatasetConfig,

    /// Optimizer settings.
    pub optimizer: OptimizerConfig,

    /// Training-loop settings.
    pub training: TrainingConfig,

    /// Evaluation-loop settings.
    pub testing: TestingConfig,

    /// Surface-supervised method block.
    pub sspa: SspaConfig,

    /// Part-query method block.
    pub mpqa: MpqaConfig,
}

impl Default for Hparams {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs/experiments"),
            method: "spin".to_string(),
            exp_name: "default".to_string(),
            exp_id: None,
            run_test: false,
            seed_value: -1,
            pl_logging: true,
            refresh_rate: 1,
            fast_dev_run: false,
            detect_anomaly: false,
            dataset: DatasetConfig::default(),
            optimizer: OptimizerConfig::default(),
            training: TrainingConfig::default(),
            testing: TestingConfig::default(),
            sspa: SspaConfig::default(),
            mpqa: MpqaConfig::default(),
        }
    }
}

/// Dataset selection, loading, and augmentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DatasetConfig {
    /// Magnitude of per-channel pixel noise augmentation.
    pub noise_factor: f32,

    /// Maximum rotation augmentation in degrees.
    pub rot_factor: f32,

    /// Maximum scale augmentation factor.
    pub scale_factor: f32,

    /// Training batch size.
    pub batch_size: usize,

    /// Dataloader worker count.
    pub num_workers: usize,

    /// Pin dataloader memory for faster host-to-device copies.
    pub pin_memory: bool,

    /// Shuffle the training split.
    pub shuffle_train: bool,

    /// Shuffle the validation split.
    pub shuffle_val: bool,

    /// Training dataset key, or several keys joined with `+`.
    pub train_ds: String,

    /// Validation dataset key.
    pub val_ds: String,

    /// Cap on images per epoch; negative means the full dataset.
    pub num_images: i64,

    /// Input crop resolution in pixels.
    pub img_res: u32,

    /// Camera focal length in pixels.
    pub focal_length: f32,

    /// Mesh color used by the visualizer.
    pub mesh_color: String,

    /// Use gender-specific body models during evaluation.
    pub gender_eval: bool,

    /// Paste synthetic occluders over training crops.
    pub use_synthetic_occlusion: bool,

    /// Object dataset the synthetic occluders are sampled from.
    pub occ_aug_dataset: String,

    /// Weight 3D supervision by per-joint confidence.
    pub use_3d_conf: bool,

    /// Use gender annotations during training.
    pub use_gender: bool,

    /// Dense supervision signal (`hm`, `hm_soft`, `part_segm`, `attention`).
    pub use_heatmaps: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            noise_factor: 0.4,
            rot_factor: 30.0,
            scale_factor: 0.25,
            batch_size: 64,
            num_workers: 8,
            pin_memory: true,
            shuffle_train: true,
            shuffle_val: true,
            train_ds: "h36m".to_string(),
            val_ds: "3dpw".to_string(),
            num_images: -1,
            img_res: IMG_RES,
            focal_length: FOCAL_LENGTH,
            mesh_color: "light_pink".to_string(),
            gender_eval: true,
            use_synthetic_occlusion: false,
            occ_aug_dataset: "pascal".to_string(),
            use_3d_conf: false,
            use_gender: false,
            use_heatmaps: "part_segm".to_string(),
        }
    }
}

/// Optimizer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OptimizerConfig {
    /// Optimizer family (`adam`, `sgd`).
    pub r#type: String,

    /// Learning rate.
    pub lr: f64,

    /// Weight decay.
    pub wd: f64,

    /// Momentum.
    pub mm: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            r#type: "adam".to_string(),
            lr: 1e-4,
            wd: 0.0,
            mm: 0.9,
        }
    }
}

/// Training-loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TrainingConfig {
    /// Checkpoint to resume from.
    pub resume: Option<PathBuf>,

    /// Backbone weights to initialize from.
    pub pretrained: Option<PathBuf>,

    /// Full trainer checkpoint to initialize from.
    pub pretrained_lit: Option<PathBuf>,

    /// Maximum number of training epochs.
    pub max_epochs: u32,

    /// Checkpoint save interval in steps.
    pub log_save_interval: u32,

    /// Interval in steps between logged training images.
    pub log_freq_tb_images: u32,

    /// Validation frequency in epochs.
    pub check_val_every_n_epoch: u32,

    /// Dataloader reload frequency in epochs; zero disables reloading.
    pub reload_dataloaders_every_n_epoch: u32,

    /// Save rendered predictions during training.
    pub save_images: bool,

    /// Apply data augmentation.
    pub use_augm: bool,

    /// Compute evaluation errors during training.
    pub cal_error: bool,

    /// Distributed training strategy (`ddp`, `ddp_spawn`).
    pub strategy: Option<String>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            resume: None,
            pretrained: None,
            pretrained_lit: None,
            max_epochs: 100,
            log_save_interval: 40,
            log_freq_tb_images: 500,
            check_val_every_n_epoch: 1,
            reload_dataloaders_every_n_epoch: 0,
            save_images: false,
            use_augm: true,
            cal_error: false,
            strategy: None,
        }
    }
}

/// Evaluation-loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TestingConfig {
    /// Save rendered predictions during evaluation.
    pub save_images: bool,

    /// Save predicted parameters to disk.
    pub save_results: bool,

    /// Render an additional side view.
    pub sideview: bool,

    /// Interval in steps between logged evaluation images.
    pub log_freq_tb_images: u32,

    /// Report all metrics instead of the headline subset.
    pub disp_all: bool,
}

impl Default for TestingConfig {
    fn default() -> Self {
        Self {
            save_images: false,
            save_results: false,
            sideview: true,
            log_freq_tb_images: 50,
            disp_all: true,
        }
    }
}

/// Hyperparameters of the surface-supervised method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SspaConfig {
    /// Feature extractor (`resnet50`, `hrnet`).
    pub backbone: String,

    /// Parameter regressor head (`hmr`).
    pub regressor: String,

    /// Loss criterion class name.
    pub criterion: String,

    /// Co-training consistency loss weight.
    pub cotraining_loss_weight: f64,

    /// Surface (part-segmentation) loss weight.
    pub surface_loss_weight: f64,

    /// Pseudo-label loss weight.
    pub pseudo_loss_weight: f64,

    /// Energy regularization weight.
    pub energy_loss_weight: f64,

    /// Mesh vertex loss weight.
    pub mesh_loss_weight: f64,

    /// Shape parameter loss weight.
    pub shape_loss_weight: f64,

    /// 2D keypoint loss weight.
    pub keypoint_loss_weight: f64,

    /// Dataset-native keypoint loss weight.
    pub keypoint_native_loss_weight: f64,

    /// Pose parameter loss weight.
    pub pose_loss_weight: f64,

    /// Shape prior (beta) loss weight.
    pub beta_loss_weight: f64,

    /// Weight of detector keypoints in the 2D loss.
    pub openpose_train_weight: f64,

    /// Weight of ground-truth keypoints in the 2D loss.
    pub gt_train_weight: f64,

    /// Overall loss scale.
    pub loss_weight: f64,

    /// Gamma coefficient of the rendered-surface loss.
    pub gamma_val: f64,

    /// Sigma coefficient of the rendered-surface loss.
    pub sigma_val: f64,

    /// Number of part masks rendered for supervision.
    pub render_mask: u32,

    /// Apply the pretreatment filter bank to backbone features.
    pub use_pretreatment: bool,

    /// Pretreatment filter sizes.
    pub pretreatment_filter: Vec<i64>,

    /// Pretreatment kernel sizes.
    pub pretreatment_kernel: Vec<i64>,

    /// ViT patch size multiplier.
    pub vit_patch: u32,

    /// ViT filter sizes.
    pub vit_filter: Vec<i64>,

    /// Add positional embeddings to transformer tokens.
    pub use_pos_embed: bool,

    /// Mask transformer tokens MAE-style during training.
    pub use_mae_mask: bool,

    /// Fraction of tokens masked when MAE masking is on.
    pub mae_mask_ratio: f64,

    /// Supervise attention maps with pseudo ground truth.
    pub use_pseudo_attention: bool,

    /// Pseudo-attention supervision objective (`KL-A`, `KL-B`).
    pub pseudo_method: String,

    /// Softmax temperature of the pseudo-attention target.
    pub pseudo_temperature: f64,
}

impl Default for SspaConfig {
    fn default() -> Self {
        Self {
            backbone: "resnet50".to_string(),
            regressor: "hmr".to_string(),
            criterion: "MSELoss".to_string(),
            cotraining_loss_weight: 0.0,
            surface_loss_weight: 0.0,
            pseudo_loss_weight: 0.0,
            energy_loss_weight: 0.0,
            mesh_loss_weight: 0.0,
            shape_loss_weight: 0.0,
            keypoint_loss_weight: 5.0,
            keypoint_native_loss_weight: 5.0,
            pose_loss_weight: 1.0,
            beta_loss_weight: 0.001,
            openpose_train_weight: 0.0,
            gt_train_weight: 1.0,
            loss_weight: 60.0,
            gamma_val: 1.0e-1,
            sigma_val: 1.0e-7,
            render_mask: 6,
            use_pretreatment: false,
            pretreatment_filter: Vec::new(),
            pretreatment_kernel: Vec::new(),
            vit_patch: 1,
            vit_filter: Vec::new(),
            use_pos_embed: true,
            use_mae_mask: false,
            mae_mask_ratio: 0.0,
            use_pseudo_attention: false,
            pseudo_method: "KL-A".to_string(),
            pseudo_temperature: 1.0,
        }
    }
}

/// Hyperparameters of the part-query method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct MpqaConfig {
    /// Feature extractor (`resnet50`, `hrnet`).
    pub backbone: String,

    /// Parameter regressor head (`hmr`).
    pub regressor: String,

    /// Mesh vertex loss weight.
    pub mesh_loss_weight: f64,

    /// Shape parameter loss weight.
    pub shape_loss_weight: f64,

    /// 2D keypoint loss weight.
    pub keypoint_loss_weight: f64,

    /// Dataset-native keypoint loss weight.
    pub keypoint_native_loss_weight: f64,

    /// Pose parameter loss weight.
    pub pose_loss_weight: f64,

    /// Shape prior (beta) loss weight.
    pub beta_loss_weight: f64,

    /// Weight of detector keypoints in the 2D loss.
    pub openpose_train_weight: f64,

    /// Weight of ground-truth keypoints in the 2D loss.
    pub gt_train_weight: f64,

    /// Overall loss scale.
    pub loss_weight: f64,

    /// Gamma coefficient of the rendered-surface loss.
    pub gamma_val: f64,

    /// Sigma coefficient of the rendered-surface loss.
    pub sigma_val: f64,

    /// Number of part query classes.
    pub num_cls: u32,

    /// Apply the pretreatment filter bank to backbone features.
    pub use_pretreatment: bool,

    /// Pretreatment filter sizes.
    pub pretreatment_filter: Vec<i64>,

    /// Pretreatment kernel sizes.
    pub pretreatment_kernel: Vec<i64>,

    /// ViT patch size multiplier.
    pub vit_patch: u32,

    /// ViT filter sizes.
    pub vit_filter: Vec<i64>,

    /// Add positional embeddings to transformer tokens.
    pub use_pos_embed: bool,

    /// Mask transformer tokens MAE-style during training.
    pub use_mae_mask: bool,

    /// Fraction of tokens masked when MAE masking is on.
    pub mae_mask_ratio: f64,

    /// Supervise attention maps with pseudo ground truth.
    pub use_pseudo_attention: bool,

    /// Pseudo-attention supervision objective (`KL-A`, `KL-B`).
    pub pseudo_method: String,

    /// Softmax temperature of the pseudo-attention target.
    pub pseudo_temperature: f64,
}

impl Default for MpqaConfig {
    fn default() -> Self {
        Self {
            backbone: "resnet50".to_string(),
            regressor: "hmr".to_string(),
            mesh_loss_weight: 0.0,
            shape_loss_weight: 0.0,
            keypoint_loss_weight: 5.0,
            keypoint_native_loss_weight: 5.0,
            pose_loss_weight: 1.0,
            beta_loss_weight: 0.001,
            openpose_train_weight: 0.0,
            gt_train_weight: 1.0,
            loss_weight: 60.0,
            gamma_val: 1.0e-1,
            sigma_val: 1.0e-7,
            num_cls: 6,
            use_pretreatment: false,
            pretreatment_filter: Vec::new(),
            pretreatment_kernel: Vec::new(),
            vit_patch: 1,
            vit_filter: Vec::new(),
            use_pos_embed: true,
            use_mae_mask: false,
            use_pseudo_attention: false,
            mae_mask_ratio: 0.0,
            pseudo_method: "KL-A".to_string(),
            pseudo_temperature: 1.0,
        }
    }
}
