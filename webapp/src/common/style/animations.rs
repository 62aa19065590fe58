// entrance and idle motion; everything runs once on mount except the bobbing
// chips, which loop
pub const ANIMATIONS: &str = r#"
@keyframes nav-drop {
  from { opacity: 0; transform: translate(-50%, -100px); }
  to { opacity: 1; transform: translate(-50%, 0); }
}

@keyframes slide-in-left {
  from { opacity: 0; transform: translateX(-50px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes slide-in-right {
  from { opacity: 0; transform: translateX(50px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes fade-up {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes cross-fade {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes cross-fade-out {
  from { opacity: 1; transform: translateY(0); }
  to { opacity: 0; transform: translateY(-30px); }
}

@keyframes bob {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}

@keyframes bob-reverse {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(10px); }
}

.slide-in-left {
  animation: slide-in-left 800ms var(--easing-standard) backwards;
}

.slide-in-right {
  animation: slide-in-right 800ms var(--easing-standard) backwards;
}

.fade-up,
.reveal {
  animation: fade-up 800ms var(--easing-standard) backwards;
}

.cross-fade {
  animation: cross-fade 500ms var(--easing-standard) backwards;
}

.cross-fade-out {
  animation: cross-fade-out 500ms var(--easing-standard) forwards;
}

/* held back until the element scrolls into view */
.reveal-pending.reveal,
.reveal-pending.slide-in-left,
.reveal-pending.slide-in-right,
.reveal-pending .reveal,
.reveal-pending .slide-in-left,
.reveal-pending .slide-in-right {
  opacity: 0;
  animation: none;
}

.bob {
  animation: bob 3s ease-in-out infinite;
}

.bob-reverse {
  animation: bob-reverse 3s ease-in-out 1s infinite;
}

.chip-top.bob {
  animation-duration: 4s;
}

@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation: none !important;
    transition: none !important;
  }

  .stat {
    opacity: 1;
    transform: none;
  }

  .stat .stat-value {
    transform: none;
  }
}
"#;
