//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "语音语料库工具");

    // Connection form
    m.insert(Key::HostLabel, "IP 地址（或 localhost）");
    m.insert(Key::PortLabel, "端口");
    m.insert(Key::UserLabel, "用户名（可选）");
    m.insert(Key::PasswordLabel, "密码（可选）");
    m.insert(Key::Connect, "连接");

    // Connection status
    m.insert(Key::StatusDisconnected, "未连接");
    m.insert(Key::StatusConnecting, "正在连接...");
    m.insert(Key::StatusConnected, "已连接");
    m.insert(Key::StatusFailed, "连接失败");

    // Corpora list
    m.insert(Key::AvailableCorpora, "可用语料库");
    m.insert(Key::NoCorpora, "没有语料库");
    m.insert(Key::AnnotationTypes, "标注类型");

    // Audio lookup
    m.insert(Key::FindAudio, "查找本地音频文件");
    m.insert(Key::SelectCorpus, "请选择语料库");
    m.insert(Key::Searching, "正在查找...");
    m.insert(Key::AudioFound, "已找到音频");
    m.insert(Key::SelectAudioDirectory, "选择目录");
    m.insert(Key::AudioScanIncomplete, "查找完成，但部分语篇没有音频");
    m.insert(Key::AudioScanFailed, "音频查找失败");

    // Cache
    m.insert(Key::ResetCache, "重置本地缓存");
    m.insert(Key::CacheResetDone, "本地缓存已重置");

    // Dialogs
    m.insert(Key::InvalidInformation, "信息无效");
    m.insert(Key::InvalidHost, "必须指定 IP 地址或使用 'localhost'。");
    m.insert(Key::InvalidPort, "端口必须是整数。");
    m.insert(Key::ConnectFailed, "无法连接到服务器");
    m.insert(Key::OperationFailed, "操作失败");
    m.insert(Key::Ok, "确定");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
