//! 异步操作状态管理
//!
//! 后台请求在独立线程中执行，完成后把结果发回主线程的通道；这里记录通道、
//! 在途请求数量以及列表拉取的序号。

use std::sync::mpsc;
use std::time::Duration;

use crate::controller::Completion;

/// 异步操作状态
#[derive(Debug)]
pub struct AsyncOpsState {
    /// 后台结果发送端（每个请求线程持有一份克隆）
    tx: mpsc::Sender<Completion>,
    /// 后台结果接收端
    rx: mpsc::Receiver<Completion>,
    /// 已发出但结果尚未处理的请求数
    in_flight: usize,
    /// 最近一次发出的列表拉取序号（0 表示尚未拉取）
    latest_fetch: u64,
}

impl Default for AsyncOpsState {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncOpsState {
    /// 创建新的异步操作状态
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            in_flight: 0,
            latest_fetch: 0,
        }
    }

    /// 登记一个新请求，返回给后台线程使用的发送端
    pub fn begin(&mut self) -> mpsc::Sender<Completion> {
        self.in_flight += 1;
        self.tx.clone()
    }

    /// 分配下一个列表拉取序号
    pub fn next_fetch_seq(&mut self) -> u64 {
        self.latest_fetch += 1;
        self.latest_fetch
    }

    /// 是否为最近一次发出的拉取
    pub fn is_latest_fetch(&self, seq: u64) -> bool {
        seq == self.latest_fetch
    }

    /// 标记一个请求的结果已处理
    pub fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// 在途请求数
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// 是否有在途请求
    pub fn has_pending(&self) -> bool {
        self.in_flight > 0
    }

    /// 非阻塞地取出一个结果
    pub fn try_next(&self) -> Option<Completion> {
        self.rx.try_recv().ok()
    }

    /// 最多等待 `timeout` 取出一个结果
    pub fn next_timeout(&self, timeout: Duration) -> Option<Completion> {
        self.rx.recv_timeout(timeout).ok()
    }
}
